pub mod property_selector;
pub mod revenue_summary;
