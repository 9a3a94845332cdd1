//! Demo catalog written into an empty product collection.

use crate::models::{Product, ProductCategory};

struct SeedProduct {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: ProductCategory,
    features: [&'static str; 4],
    image: &'static str,
}

const SEED_PRODUCTS: [SeedProduct; 6] = [
    SeedProduct {
        id: "seed-1",
        title: "B-27 Official Silhouette",
        description: "Standard FBI Q-target dimensions. Printed on high-quality non-glare paper for superior visibility in indoor lighting conditions.",
        category: ProductCategory::Paper,
        features: [
            "Official Dimensions",
            "Non-glare Matte Finish",
            "100 Pack Bundle",
            "High Contrast Ink",
        ],
        image: "https://images.unsplash.com/photo-1595590424283-b8f17842773f?auto=format&fit=crop&q=80&w=800",
    },
    SeedProduct {
        id: "seed-2",
        title: "AR500 Steel Gong (10\")",
        description: "3/8\" thick AR500 steel gong designed for centerfire handgun and rifle use. Audible feedback confirm hits instantly.",
        category: ProductCategory::Metal,
        features: [
            "3/8\" AR500 Steel",
            "Laser Cut Edges",
            "Powder Coated Finish",
            "Mounting Holes Included",
        ],
        image: "https://images.unsplash.com/photo-1599313689439-d36d40c749b5?auto=format&fit=crop&q=80&w=800",
    },
    SeedProduct {
        id: "seed-3",
        title: "Auto-Reset Popper",
        description: "Heavy-duty steel popper that falls when hit and automatically resets via spring mechanism. No manual reset required.",
        category: ProductCategory::Metal,
        features: [
            "Auto-Reset Spring",
            "Adjustable Calibration",
            "All-Weather Coating",
            "Heavy Base",
        ],
        image: "https://images.unsplash.com/photo-1533575677944-77e84ce43a85?auto=format&fit=crop&q=80&w=800",
    },
    SeedProduct {
        id: "seed-4",
        title: "Smart Range Tablet",
        description: "Control target distance, turning intervals, and lighting presets directly from the firing lane.",
        category: ProductCategory::Tech,
        features: [
            "Touchscreen Interface",
            "Wireless Connection",
            "Preset Drills",
            "Rugged Casing",
        ],
        image: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?auto=format&fit=crop&q=80&w=800",
    },
    SeedProduct {
        id: "seed-5",
        title: "Overhead Retriever System",
        description: "Rail-mounted target retrieval system with smooth acceleration and variable speed control.",
        category: ProductCategory::Range,
        features: [
            "Wireless Control",
            "360 Degree Turning",
            "LED Target Light",
            "Heavy Payload Capable",
        ],
        image: "https://images.unsplash.com/photo-1583307222340-988362d8544a?auto=format&fit=crop&q=80&w=800",
    },
    SeedProduct {
        id: "seed-6",
        title: "Ballistic Rubber Trap",
        description: "Granulated rubber bullet trap designed to capture rounds safely with minimal lead dust.",
        category: ProductCategory::Range,
        features: [
            "Captures up to .308",
            "Fire Retardant",
            "Low Maintenance",
            "Dust Containment",
        ],
        image: "https://images.unsplash.com/photo-1516246342263-d30907474438?auto=format&fit=crop&q=80&w=800",
    },
];

/// The six products written into an empty catalog.
#[must_use]
pub fn default_products() -> Vec<Product> {
    SEED_PRODUCTS
        .iter()
        .map(|seed| Product {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category,
            features: seed.features.iter().map(ToString::to_string).collect(),
            image: seed.image.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_seeds_with_unique_ids() {
        let products = default_products();
        assert_eq!(products.len(), 6);
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
        assert!(products.iter().all(|p| p.features.len() == 4));
    }
}
