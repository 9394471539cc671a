mod asset;
pub use asset::AssetProvider;

mod compiler;
pub use compiler::Compiler;

mod config;
pub use config::{Config, DEFAULT_MAKEFILE};

pub mod output;
pub use output::{OutputContext, OutputKind, OutputProvider};

mod template;
pub use template::Template;

pub use dbdef_core::{
    bail, err,
    schema::{self, Db},
    Error, Mapping, Result, Token,
};
