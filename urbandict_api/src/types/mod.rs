mod response;
pub use self::response::{DefineResponse, RawRecord};

mod word;
pub use self::word::{DefinitionID, WordEntry};
