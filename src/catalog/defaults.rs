// @generated by `plan-catalog export`. Do not edit by hand.
// The package store is the source of truth; regenerate after catalog edits.
// Fingerprint: 2d18f906c8cbdd7ef6945b638b1f847b56392e5d99eb9e4c1234b62e05959c6b

use crate::record::{Carrier, Period, PlanRecord};

/// Built-in catalog used when the store is empty or missing.
///
/// Grouped by carrier in storefront order, month plans before year plans.
pub fn default_packages() -> Vec<PlanRecord> {
    vec![
        PlanRecord {
            id: "verizon-unlimited-welcome".to_string(),
            carrier: Carrier::Verizon,
            name: "Unlimited Welcome".to_string(),
            price: 65.0,
            period: Period::Month,
            data: "Unlimited".to_string(),
            speed: "5G".to_string(),
            hotspot: "None".to_string(),
            features: vec![
                "Unlimited talk & text".to_string(),
                "Unlimited data on our 5G network".to_string(),
                "Disney+ Basic on us".to_string(),
            ],
            badge: None,
        },
        PlanRecord {
            id: "verizon-unlimited-plus".to_string(),
            carrier: Carrier::Verizon,
            name: "Unlimited Plus (30GB Hotspot)".to_string(),
            price: 80.0,
            period: Period::Month,
            data: "Unlimited".to_string(),
            speed: "5G Ultra Wideband".to_string(),
            hotspot: "30GB".to_string(),
            features: vec![
                "30GB premium mobile hotspot".to_string(),
                "HD streaming on us".to_string(),
                "50% off one watch or tablet plan".to_string(),
            ],
            badge: Some("Most Popular".to_string()),
        },
        PlanRecord {
            id: "verizon-unlimited-welcome-annual".to_string(),
            carrier: Carrier::Verizon,
            name: "Unlimited Welcome (Annual)".to_string(),
            price: 650.0,
            period: Period::Year,
            data: "Unlimited".to_string(),
            speed: "5G".to_string(),
            hotspot: "None".to_string(),
            features: vec![
                "Unlimited talk & text".to_string(),
                "Two months free vs monthly billing".to_string(),
            ],
            badge: None,
        },
        PlanRecord {
            id: "att-value-plus".to_string(),
            carrier: Carrier::Att,
            name: "Value Plus VL".to_string(),
            price: 50.99,
            period: Period::Month,
            data: "Unlimited".to_string(),
            speed: "5G".to_string(),
            hotspot: "None".to_string(),
            features: vec![
                "Unlimited talk, text & data".to_string(),
                "Standard-definition streaming".to_string(),
            ],
            badge: None,
        },
        PlanRecord {
            id: "att-unlimited-extra".to_string(),
            carrier: Carrier::Att,
            name: "Unlimited Extra EL (30GB Hotspot)".to_string(),
            price: 65.99,
            period: Period::Month,
            data: "Unlimited".to_string(),
            speed: "5G+".to_string(),
            hotspot: "30GB".to_string(),
            features: vec![
                "30GB hotspot data per line".to_string(),
                "ActiveArmor security".to_string(),
            ],
            badge: None,
        },
        PlanRecord {
            id: "att-prepaid-16gb-annual".to_string(),
            carrier: Carrier::Att,
            name: "Prepaid 16GB Plan (Annual)".to_string(),
            price: 200.0,
            period: Period::Year,
            data: "16GB".to_string(),
            speed: "5G".to_string(),
            hotspot: "None".to_string(),
            features: vec![
                "16GB high-speed data".to_string(),
                "Rollover data for 12 months".to_string(),
            ],
            badge: None,
        },
        PlanRecord {
            id: "tmobile-essentials-saver".to_string(),
            carrier: Carrier::Tmobile,
            name: "Essentials Saver".to_string(),
            price: 50.0,
            period: Period::Month,
            data: "Unlimited".to_string(),
            speed: "5G".to_string(),
            hotspot: "None".to_string(),
            features: vec![
                "Unlimited talk & text".to_string(),
                "Scam Shield protection".to_string(),
            ],
            badge: None,
        },
        PlanRecord {
            id: "tmobile-go5g-plus".to_string(),
            carrier: Carrier::Tmobile,
            name: "Go5G Plus (50GB Hotspot)".to_string(),
            price: 90.0,
            period: Period::Month,
            data: "Unlimited".to_string(),
            speed: "5G Ultra Capacity".to_string(),
            hotspot: "50GB".to_string(),
            features: vec![
                "50GB high-speed mobile hotspot".to_string(),
                "Netflix on us".to_string(),
                "Apple TV+ on us".to_string(),
            ],
            badge: Some("Best Value".to_string()),
        },
        PlanRecord {
            id: "tmobile-go5g-annual".to_string(),
            carrier: Carrier::Tmobile,
            name: "Go5G (23GB Hotspot - Annual)".to_string(),
            price: 900.0,
            period: Period::Year,
            data: "Unlimited".to_string(),
            speed: "5G Ultra Capacity".to_string(),
            hotspot: "23GB".to_string(),
            features: vec![
                "23GB mobile hotspot".to_string(),
                "Voicemail to text".to_string(),
            ],
            badge: None,
        },
        PlanRecord {
            id: "uscellular-basic".to_string(),
            carrier: Carrier::Uscellular,
            name: "Basic Plan".to_string(),
            price: 40.0,
            period: Period::Month,
            data: "Unlimited".to_string(),
            speed: "5G".to_string(),
            hotspot: "15GB".to_string(),
            features: vec![
                "15GB mobile hotspot".to_string(),
                "Unlimited talk & text".to_string(),
            ],
            badge: None,
        },
        PlanRecord {
            id: "uscellular-even-better-30gb".to_string(),
            carrier: Carrier::Uscellular,
            name: "Even Better 30GB".to_string(),
            price: 60.0,
            period: Period::Month,
            data: "30GB".to_string(),
            speed: "5G".to_string(),
            hotspot: "None".to_string(),
            features: vec![
                "30GB high-speed data".to_string(),
                "Payback for unused data".to_string(),
            ],
            badge: None,
        },
        PlanRecord {
            id: "mintmobile-5gb".to_string(),
            carrier: Carrier::Mintmobile,
            name: "5GB Plan".to_string(),
            price: 15.0,
            period: Period::Month,
            data: "5GB".to_string(),
            speed: "5G".to_string(),
            hotspot: "None".to_string(),
            features: vec![
                "5GB high-speed data".to_string(),
                "Unlimited talk & text".to_string(),
            ],
            badge: None,
        },
        PlanRecord {
            id: "mintmobile-15gb-annual".to_string(),
            carrier: Carrier::Mintmobile,
            name: "15GB Plan (12 months)".to_string(),
            price: 240.0,
            period: Period::Year,
            data: "15GB".to_string(),
            speed: "5G".to_string(),
            hotspot: "None".to_string(),
            features: vec![
                "15GB high-speed data".to_string(),
                "Free calls to Mexico and Canada".to_string(),
            ],
            badge: Some("Lowest Price".to_string()),
        },
        PlanRecord {
            id: "mintmobile-unlimited-annual".to_string(),
            carrier: Carrier::Mintmobile,
            name: "Unlimited Plan (12 months)".to_string(),
            price: 360.0,
            period: Period::Year,
            data: "Unlimited".to_string(),
            speed: "5G".to_string(),
            hotspot: "10GB".to_string(),
            features: vec![
                "10GB mobile hotspot".to_string(),
                "Free calls to Mexico and Canada".to_string(),
            ],
            badge: None,
        },
        PlanRecord {
            id: "cricket-core".to_string(),
            carrier: Carrier::Cricket,
            name: "Cricket Core".to_string(),
            price: 55.0,
            period: Period::Month,
            data: "Unlimited".to_string(),
            speed: "5G".to_string(),
            hotspot: "15GB".to_string(),
            features: vec![
                "15GB mobile hotspot".to_string(),
                "HBO Max with ads".to_string(),
            ],
            badge: None,
        },
        PlanRecord {
            id: "cricket-simply-data-100gb".to_string(),
            carrier: Carrier::Cricket,
            name: "Simply Data 100GB".to_string(),
            price: 90.0,
            period: Period::Month,
            data: "100GB".to_string(),
            speed: "4G LTE".to_string(),
            hotspot: "None".to_string(),
            features: vec![
                "100GB high-speed data".to_string(),
                "Add more data anytime".to_string(),
            ],
            badge: None,
        },
    ]
}
