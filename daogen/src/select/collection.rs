//! Result shapes of multi-row accessors

use crate::config::CollectionShape;

impl CollectionShape {
    /// Declared result type for rows of `class_name`
    #[must_use]
    pub fn result_type(self, class_name: &str) -> String {
        match self {
            Self::List => format!("List[{class_name}]"),
            Self::Vector => format!("Vector[{class_name}]"),
            Self::Array => format!("Array[{class_name}]"),
            Self::ParametricBuilder => format!("C[{class_name}]"),
        }
    }

    /// Type parameters of the accessor
    #[must_use]
    pub const fn type_params(self) -> &'static str {
        match self {
            Self::ParametricBuilder => "[C[_]]",
            Self::List | Self::Vector | Self::Array => "",
        }
    }

    /// Extra implicit parameter building the collection
    #[must_use]
    pub fn builder_implicit(self, class_name: &str) -> Option<String> {
        match self {
            Self::ParametricBuilder => Some(format!(
                "cbf: CanBuildFrom[Nothing, {class_name}, C[{class_name}]]"
            )),
            Self::List | Self::Vector | Self::Array => None,
        }
    }

    /// Row-extraction call
    #[must_use]
    pub const fn fetch(self) -> &'static str {
        match self {
            Self::List => ".list",
            Self::Vector | Self::Array | Self::ParametricBuilder => ".collection",
        }
    }

    /// Type argument of the terminal call
    #[must_use]
    pub const fn type_arg(self) -> Option<&'static str> {
        match self {
            Self::List => None,
            Self::Vector => Some("Vector"),
            Self::Array => Some("Array"),
            Self::ParametricBuilder => Some("C"),
        }
    }

    /// Import the shape needs
    #[must_use]
    pub const fn import(self) -> Option<&'static str> {
        match self {
            Self::ParametricBuilder => Some("import scala.collection.generic.CanBuildFrom"),
            Self::List | Self::Vector | Self::Array => None,
        }
    }
}
