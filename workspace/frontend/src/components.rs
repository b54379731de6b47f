pub mod business_plan;
pub mod charts;
pub mod section_page;
