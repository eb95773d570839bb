//! phpdocgen — find PHP functions without PHPDoc blocks, flag doc blocks whose
//! `@param` tags drifted from the signature, and ask a completion service to
//! write the missing ones.

pub mod error;
pub mod generate;
pub mod model;
pub mod parser;
pub mod render;

pub use error::{Error, Result};
pub use model::{BodyState, DocStatus, FunctionDescriptor, ParameterRecord};
pub use parser::params::params_are_the_same;
pub use parser::{get_functions_from_file, get_functions_from_string};
