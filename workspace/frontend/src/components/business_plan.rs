mod navigation;
pub mod sections;
mod view;

pub use view::BusinessPlanView;
