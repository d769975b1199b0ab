//! Cadenza type syntax: primitive names and `Name<Args, ...>` generics.

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Type {
    Named(String),
    Generic { base: String, args: Vec<Type> },
}

impl Type {
    pub fn unit() -> Self {
        Type::Named("Unit".to_string())
    }

    pub fn result(ok: Type, err: Type) -> Self {
        Type::Generic { base: "Result".to_string(), args: vec![ok, err] }
    }

    pub fn option(inner: Type) -> Self {
        Type::Generic { base: "Option".to_string(), args: vec![inner] }
    }

    pub fn list(inner: Type) -> Self {
        Type::Generic { base: "List".to_string(), args: vec![inner] }
    }

    /// `Some((ok, err))` if this is `Result<ok, err>`.
    pub fn as_result(&self) -> Option<(&Type, &Type)> {
        match self {
            Type::Generic { base, args } if base == "Result" && args.len() == 2 => Some((&args[0], &args[1])),
            _ => None,
        }
    }

    /// `Some(inner)` if this is `Option<inner>`.
    pub fn as_option(&self) -> Option<&Type> {
        match self {
            Type::Generic { base, args } if base == "Option" && args.len() == 1 => Some(&args[0]),
            _ => None,
        }
    }

    pub fn base_name(&self) -> &str {
        match self {
            Type::Named(name) => name,
            Type::Generic { base, .. } => base,
        }
    }

    /// Maps a Cadenza primitive type name to its C# spelling; generic and
    /// user-defined names pass through unchanged (a user type and its C#
    /// name always coincide in this language).
    pub fn csharp_primitive(name: &str) -> Option<&'static str> {
        match name {
            "string" => Some("string"),
            "int" => Some("int"),
            "bool" => Some("bool"),
            "Unit" => Some("void"),
            _ => None,
        }
    }
}
