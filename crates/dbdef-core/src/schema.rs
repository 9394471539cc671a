mod column;
pub use column::{Column, DEFAULT_COLUMN_TYPE};

mod constraint;
pub use constraint::{Constraint, ConstraintKind};

mod db;
pub use db::Db;

mod function;
pub use function::{
    Direction, Function, FunctionReturn, Param, DEFAULT_PARAM_TYPE, DEFAULT_RETURN_TYPE,
    DEFAULT_SEPARATOR, TABLE_RETURN_TYPE,
};

mod index;
pub use index::{Index, SortOrder, DEFAULT_INDEX_TYPE};

mod makefile;
pub use makefile::{MakefileInfo, OutputRequest, DEFAULT_DEFINITIONS_GLOB, DEFAULT_MAPPING_FILE};

mod object;
pub use object::{Object, ObjectType};

mod properties;
pub use properties::{Properties, DESCRIPTION, TITLE};

mod sequence;
pub use sequence::Sequence;

mod table;
pub use table::Table;
