//! Display for normal forms: each coordinate as a bracketed list ending in
//! its return type, coordinates separated by `&`.

use std::fmt::{self, Display};

use crate::types::{Coordinate, NormalForm};

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

impl Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coordinate) in self.coordinates().iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{coordinate}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_type;
    use crate::types::normalize;

    #[test]
    fn test_display_normal_form() {
        let ty = parse_type("int * string -> bool * char").unwrap();
        assert_eq!(
            normalize(&ty).to_string(),
            "[int, string, bool] & [int, string, char]"
        );
    }

    #[test]
    fn test_display_nested_function() {
        let ty = parse_type("('a -> 'b) -> 'a list -> 'b list").unwrap();
        assert_eq!(normalize(&ty).to_string(), "['a -> 'b, 'a list, 'b list]");
    }
}
