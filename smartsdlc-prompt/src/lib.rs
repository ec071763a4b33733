mod modules;
mod template;

pub use modules::SdlcModule;
pub use template::PromptTemplate;
