//! Prompt construction for the assessment analysis
//!
//! The system instruction is rendered once from the catalog; the user prompt
//! is a pure function of the intake.

use crate::core::catalog::ProductCatalog;
use crate::core::intake::{
    AnalyzeRequest, BudgetTimeline, BusinessProfile, CurrentSetup, PrintVolume, WorkflowNeeds,
};

const ROLE_INSTRUCTION: &str = "You are an experienced print consultant working for a managed print \
reseller. You assess a customer's print environment and recommend equipment from our product catalog.";

const OUTPUT_CONTRACT: &str = r#"Respond with a single JSON object and nothing else: no introduction, no explanation and no markdown. The object must have exactly this shape:

{
  "summary": string,            // 2-4 sentence overview of the assessment
  "keyFindings": [string],      // observations about the current environment
  "recommendations": [          // ordered by priority, most important first
    {
      "productId": string,      // must be one of the catalog ids listed below
      "rank": integer,          // 1 is the highest priority
      "quantity": integer,      // number of units suggested
      "rationale": string,      // why this product fits the customer
      "costImpact": string      // expected effect on running costs
    }
  ],
  "nextSteps": [string],        // practical actions for the customer
  "estimatedSavings": string    // optional, for example "15-20% on running costs"
}"#;

const RULES: &str = "Rules:
- Every productId must be copied exactly from the catalog below. Never invent products.
- Recommend between 1 and 4 products.
- Match device speed and recommended monthly volume to the customer's volumes.
- Only recommend A3 devices when the customer needs A3 output or large format.
- Only recommend colour devices when the customer prints colour.";

/// Rendered prompt pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// System instruction
    pub system: String,
    /// User message
    pub user: String,
}

/// Builds prompts against a fixed catalog
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system: String,
}

impl PromptBuilder {
    pub fn new(catalog: &ProductCatalog) -> Self {
        Self {
            system: render_system(catalog),
        }
    }

    /// The system instruction shared by every request
    pub fn system_instruction(&self) -> &str {
        &self.system
    }

    /// Render the prompt pair for one request
    pub fn build(&self, request: &AnalyzeRequest) -> Prompt {
        Prompt {
            system: self.system.clone(),
            user: render_user(request),
        }
    }
}

fn render_system(catalog: &ProductCatalog) -> String {
    let mut sections = vec![
        ROLE_INSTRUCTION.to_string(),
        OUTPUT_CONTRACT.to_string(),
        RULES.to_string(),
    ];

    let mut listing =
        vec!["Product catalog (id | name | format | speed | recommended volume):".to_string()];
    listing.extend(
        catalog
            .entries()
            .iter()
            .map(|entry| format!("- {}", entry.headline())),
    );
    sections.push(listing.join("\n"));

    sections.join("\n\n")
}

fn render_user(request: &AnalyzeRequest) -> String {
    [
        "Please assess the following print environment and recommend equipment.".to_string(),
        business_section(&request.business_profile),
        setup_section(&request.current_setup),
        volume_section(&request.print_volume),
        workflow_section(&request.workflow_needs),
        budget_section(&request.budget_timeline),
    ]
    .join("\n\n")
}

fn business_section(profile: &BusinessProfile) -> String {
    let mut lines = vec!["## Business profile".to_string()];
    if let Some(name) = non_blank(profile.company_name.as_deref()) {
        lines.push(format!("- Company: {}", name));
    }
    lines.push(format!("- Industry: {}", profile.industry.label()));
    lines.push(format!(
        "- Organisation size: {}",
        profile.organisation_size.label()
    ));
    lines.push(format!("- Locations: {}", profile.locations));
    if let Some(context) = non_blank(profile.additional_context.as_deref()) {
        lines.push(format!("- Additional context: {}", context));
    }
    lines.join("\n")
}

fn setup_section(setup: &CurrentSetup) -> String {
    let mut lines = vec![
        "## Current setup".to_string(),
        format!("- Printers and multifunction devices: {}", setup.printer_count),
        format!("- Average equipment age: {}", setup.equipment_age.label()),
    ];
    if let Some(ownership) = setup.ownership {
        lines.push(format!("- Ownership: {}", ownership.label()));
    }

    let brands = if setup.current_brands.is_empty() {
        "not specified".to_string()
    } else {
        setup.current_brands.join(", ")
    };
    lines.push(format!("- Current brands: {}", brands));

    let pain_points = if setup.pain_points.is_empty() {
        "none reported".to_string()
    } else {
        setup
            .pain_points
            .iter()
            .map(|point| point.label())
            .collect::<Vec<_>>()
            .join("; ")
    };
    lines.push(format!("- Pain points: {}", pain_points));

    if let Some(notes) = non_blank(setup.notes.as_deref()) {
        lines.push(format!("- Notes: {}", notes));
    }
    lines.join("\n")
}

fn volume_section(volume: &PrintVolume) -> String {
    let total = match volume.total {
        Some(total) => format!("{} (stated)", total),
        None => format!("{} (mono plus colour)", volume.effective_total()),
    };

    let mut lines = vec![
        "## Print volume (pages per month)".to_string(),
        format!("- Mono: {}", volume.mono),
        format!("- Colour: {}", volume.colour),
        format!("- Total: {}", total),
    ];
    if let Some(share) = volume.a3_percentage {
        lines.push(format!("- Share printed on A3: {}%", share));
    }
    lines.join("\n")
}

fn workflow_section(needs: &WorkflowNeeds) -> String {
    let mut lines = vec!["## Workflow needs".to_string()];
    if needs.is_empty() {
        lines.push("- no specific requirements".to_string());
    } else {
        lines.extend(needs.iter().map(|capability| format!("- {}", capability.label())));
    }
    lines.join("\n")
}

fn budget_section(budget: &BudgetTimeline) -> String {
    let mut lines = vec![
        "## Budget and timeline".to_string(),
        format!("- Budget: {}", budget.budget.label()),
        format!("- Timeline: {}", budget.timeline.label()),
    ];
    if let Some(acquisition) = budget.acquisition {
        lines.push(format!("- Acquisition preference: {}", acquisition.label()));
    }
    lines.join("\n")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
