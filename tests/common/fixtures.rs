//! Test fixtures and data factories
//!
//! Intake payloads are built as raw JSON, the way a browser sends them.

use serde_json::{Value, json};

/// Model reply wrapped in a markdown fence with leading prose
pub const FENCED_REPLY: &str = "Here you go:\n```json\n{\"summary\":\"ok\",\"recommendations\":[{\"productId\":\"hp-e78625dn\",\"rank\":1}]}\n```";

/// Bare JSON reply naming a product that is not in the catalog
pub const UNKNOWN_PRODUCT_REPLY: &str =
    r#"{"summary":"ok","recommendations":[{"productId":"does-not-exist","rank":1}]}"#;

/// A complete reply exercising every optional field
pub const FULL_REPLY: &str = r#"```json
{
  "summary": "The fleet is old and expensive to run.",
  "keyFindings": ["Six devices from three brands", "Colour is 20% of volume"],
  "recommendations": [
    {
      "productId": "hp-e57540dn",
      "rank": 1,
      "quantity": 4,
      "rationale": "A4 colour covers most departments",
      "costImpact": "Lower cost per page",
      "confidence": "high"
    },
    {
      "productId": "hp-e78625dn",
      "rank": 2,
      "quantity": 1,
      "rationale": "One A3 device for the design team"
    }
  ],
  "nextSteps": ["Book a site survey"],
  "estimatedSavings": "15-20% on running costs"
}
```"#;

/// Prose with no JSON at all
pub const PROSE_REPLY: &str = "I'm sorry, I can't help with that request.";

/// Factory for wizard submissions
pub struct IntakeFactory;

impl IntakeFactory {
    /// A complete, valid submission
    pub fn create() -> Value {
        json!({
            "businessProfile": {
                "companyName": "Harbour Dental",
                "industry": "healthcare",
                "organisationSize": "11-50",
                "locations": 2
            },
            "currentSetup": {
                "printerCount": 6,
                "equipmentAge": "5+",
                "currentBrands": ["Brother", "Canon"],
                "painPoints": ["highCosts", "frequentBreakdowns"]
            },
            "printVolume": { "mono": 5000, "colour": 1200 },
            "workflowNeeds": ["scanning"],
            "budgetTimeline": { "budget": "5k-15k", "timeline": "1-3-months" }
        })
    }

    /// A valid submission with the named sections removed
    pub fn without(sections: &[&str]) -> Value {
        let mut payload = Self::create();
        if let Some(object) = payload.as_object_mut() {
            for section in sections {
                object.remove(*section);
            }
        }
        payload
    }
}
