pub mod prediction_pipeline;
