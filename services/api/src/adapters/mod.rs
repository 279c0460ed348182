pub mod recommend_llm;

pub use recommend_llm::OpenAiRecommendAdapter;
