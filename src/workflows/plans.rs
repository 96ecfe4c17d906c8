//! Static plan catalog and the side-by-side comparison picker.

use serde::{Deserialize, Serialize};

pub const MAX_COMPARED_PLANS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetalTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl MetalTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkType {
    #[serde(rename = "HMO")]
    Hmo,
    #[serde(rename = "PPO")]
    Ppo,
}

impl NetworkType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hmo => "HMO",
            Self::Ppo => "PPO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub tier: MetalTier,
    pub network: NetworkType,
    pub monthly_premium: u32,
    pub deductible: u32,
    pub out_of_pocket_max: u32,
    pub eligibility: String,
}

impl Plan {
    fn new(
        id: &str,
        name: &str,
        tier: MetalTier,
        network: NetworkType,
        costs: (u32, u32, u32),
        eligibility: &str,
    ) -> Self {
        let (monthly_premium, deductible, out_of_pocket_max) = costs;
        Self {
            id: id.to_string(),
            name: name.to_string(),
            tier,
            network,
            monthly_premium,
            deductible,
            out_of_pocket_max,
            eligibility: eligibility.to_string(),
        }
    }

    pub fn premium_label(&self) -> String {
        match self.monthly_premium {
            0 => "FREE".to_string(),
            premium => format!("${premium}/month"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    pub fn standard() -> Self {
        Self {
            plans: vec![
                Plan::new(
                    "healthfirst-basic",
                    "HealthFirst Basic",
                    MetalTier::Bronze,
                    NetworkType::Hmo,
                    (0, 0, 0),
                    "Available for households up to 138% of Federal Poverty Level",
                ),
                Plan::new(
                    "careshield-plus",
                    "CareShield Plus",
                    MetalTier::Silver,
                    NetworkType::Ppo,
                    (75, 500, 3_000),
                    "Available for households 138-250% of Federal Poverty Level",
                ),
                Plan::new(
                    "wellcare-enhanced",
                    "WellCare Enhanced",
                    MetalTier::Gold,
                    NetworkType::Ppo,
                    (200, 1_000, 5_000),
                    "Available for households 250-400% of Federal Poverty Level",
                ),
                Plan::new(
                    "premium-choice",
                    "Premium Choice",
                    MetalTier::Platinum,
                    NetworkType::Ppo,
                    (350, 500, 3_000),
                    "Available for all income levels",
                ),
            ],
        }
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn find(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == id)
    }
}

/// Plans picked for side-by-side comparison, capped at [`MAX_COMPARED_PLANS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    selected: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The selection is full; the plan was not added.
    Full,
}

impl ComparisonSelection {
    pub fn toggle(&mut self, plan_id: &str) -> ToggleOutcome {
        if let Some(position) = self.selected.iter().position(|id| id == plan_id) {
            self.selected.remove(position);
            return ToggleOutcome::Removed;
        }

        if self.selected.len() >= MAX_COMPARED_PLANS {
            return ToggleOutcome::Full;
        }

        self.selected.push(plan_id.to_string());
        ToggleOutcome::Added
    }

    pub fn contains(&self, plan_id: &str) -> bool {
        self.selected.iter().any(|id| id == plan_id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Selected plans in catalog order; ids missing from the catalog are skipped.
    pub fn resolve<'a>(&self, catalog: &'a PlanCatalog) -> Vec<&'a Plan> {
        catalog
            .plans()
            .iter()
            .filter(|plan| self.contains(&plan.id))
            .collect()
    }
}
