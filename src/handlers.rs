pub mod business_plan;
pub mod health;
