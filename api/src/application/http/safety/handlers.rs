pub mod get_safety_summary;
pub mod submit_safety_feedback;
