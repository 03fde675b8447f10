use rust_decimal::Decimal;

/// A single money-saving suggestion produced by the insights gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingTip {
    pub tip: String,
    pub category: String,
    pub potential_saving: Decimal,
}

/// A suggested monthly budget for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRecommendation {
    pub category: String,
    pub recommended_amount: Decimal,
    pub reasoning: String,
}

/// Full advisory payload returned by one gateway fetch. Replaces any
/// previously displayed payload wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insights {
    pub budget_recommendations: Vec<BudgetRecommendation>,
    pub saving_tips: Vec<SavingTip>,
}

impl Insights {
    pub fn is_empty(&self) -> bool {
        self.budget_recommendations.is_empty() && self.saving_tips.is_empty()
    }
}
