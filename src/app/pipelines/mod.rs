pub mod comment_pipeline;
