pub mod cgm_named;
pub mod engagement_named;
pub mod no_cgm;
