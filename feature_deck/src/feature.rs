//! The fixed set of feature slides shown by the showcase.

/// One feature slide.  Immutable; the full set lives in [`FEATURES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub id:      u32,
    pub title:   &'static str,
    pub heading: &'static str,
    pub bullets: &'static [&'static str],
    /// Remote image URL.  Fetching is left to whoever renders it.
    pub image:   &'static str,
}

/// Alt text used for every slide image.
pub const IMAGE_ALT: &str = "iPhone feature";

/// The five showcase slides, in display order.
pub static FEATURES: [Feature; 5] = [
    Feature {
        id:      1,
        title:   "Feature 1 : Lorem ipsum dolor",
        heading: "TEXT HEADING DISPLAY",
        bullets: &[
            "Lorem ipsum dolor sit amet consectetur adipiscing elit, sed do eiusmod.",
            "Ut enim minim: veniam quis nostrud exercitation ullamco laboris nisi ut aliquip.",
            "Sed ut perspiciatis: unde omnis iste natus error sit voluptatem accusantium.",
            "Excepteur sint occaecat: cupidatat non proident sunt in culpa qui officia deserunt.",
        ],
        image:   "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?q=80&w=800&auto=format&fit=crop",
    },
    Feature {
        id:      2,
        title:   "Feature 2 : Lorem ipsum dolor",
        heading: "POWERFUL PERFORMANCE",
        bullets: &[
            "Faster loads with on-device caching and smart prefetching.",
            "Battery-friendly rendering pipeline and haptics.",
            "Accessible by default with semantic interactions.",
            "Enterprise-grade security baked in.",
        ],
        image:   "https://images.unsplash.com/photo-1510557880182-3d4d3cba35a5?q=80&w=800&auto=format&fit=crop",
    },
    Feature {
        id:      3,
        title:   "Feature 3 : Lorem ipsum dolor",
        heading: "BEAUTIFUL INTERACTIONS",
        bullets: &[
            "Fluid transitions tuned for 60fps.",
            "Delightful micro-animations with reduced motion support.",
            "Context-aware UI with instant feedback.",
            "Customizable theming.",
        ],
        image:   "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?q=80&w=800&auto=format&fit=crop",
    },
    Feature {
        id:      4,
        title:   "Feature 4 : Lorem ipsum dolor",
        heading: "REAL-TIME SYNC",
        bullets: &[
            "Live collaboration across devices.",
            "Conflict-free offline editing.",
            "Background refresh with minimal data usage.",
            "Granular permissions.",
        ],
        image:   "https://images.unsplash.com/photo-1503602642458-232111445657?q=80&w=800&auto=format&fit=crop",
    },
    Feature {
        id:      5,
        title:   "Feature 5 : Lorem ipsum dolor",
        heading: "ANALYTICS INSIGHTS",
        bullets: &[
            "Understand behavior with privacy-first metrics.",
            "Automatic anomaly detection.",
            "Exportable dashboards.",
            "Shareable reports.",
        ],
        image:   "https://images.unsplash.com/photo-1519974719765-e6559eac2575?q=80&w=800&auto=format&fit=crop",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        for (i, f) in FEATURES.iter().enumerate() {
            assert_eq!(f.id as usize, i + 1);
        }
    }

    #[test]
    fn every_slide_has_four_bullets_and_an_https_image() {
        for f in &FEATURES {
            assert_eq!(f.bullets.len(), 4, "feature {}", f.id);
            assert!(f.image.starts_with("https://"));
        }
    }
}
