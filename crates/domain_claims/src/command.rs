//! Invocation commands
//!
//! Function names are resolved once, at the contract boundary, into a
//! [`Function`]. Anything that does not resolve is an unknown function.

use std::fmt;
use std::str::FromStr;

use crate::error::ContractError;

/// Functions the claim contract exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    QueryClaim,
    InitLedger,
    CreateClaim,
    QueryAllClaims,
}

impl Function {
    pub const ALL: [Function; 4] = [
        Function::QueryClaim,
        Function::InitLedger,
        Function::CreateClaim,
        Function::QueryAllClaims,
    ];

    /// Name used on the wire
    pub fn name(self) -> &'static str {
        match self {
            Function::QueryClaim => "queryClaim",
            Function::InitLedger => "initLedger",
            Function::CreateClaim => "createClaim",
            Function::QueryAllClaims => "queryAllClaims",
        }
    }

    /// Exact argument count the function requires, if it checks one
    pub fn arity(self) -> Option<usize> {
        match self {
            Function::QueryClaim => Some(1),
            Function::CreateClaim => Some(8),
            Function::InitLedger | Function::QueryAllClaims => None,
        }
    }

    /// Checks `args` against the function's arity
    pub fn check_args(self, args: &[String]) -> Result<(), ContractError> {
        match self.arity() {
            Some(expected) if args.len() != expected => {
                Err(ContractError::argument_count(expected, args.len()))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Function {
    type Err = ContractError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "queryClaim" => Ok(Function::QueryClaim),
            "initLedger" => Ok(Function::InitLedger),
            "createClaim" => Ok(Function::CreateClaim),
            "queryAllClaims" => Ok(Function::QueryAllClaims),
            other => Err(ContractError::unknown_function(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for function in Function::ALL {
            assert_eq!(function.name().parse::<Function>().unwrap(), function);
        }
    }

    #[test]
    fn test_retired_template_function_is_unknown() {
        assert!(matches!(
            "changeCarOwner".parse::<Function>(),
            Err(ContractError::UnknownFunction(name)) if name == "changeCarOwner"
        ));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("QueryClaim".parse::<Function>().is_err());
        assert!("queryclaim".parse::<Function>().is_err());
    }

    #[test]
    fn test_check_args() {
        let one = vec!["CLAIM0".to_string()];
        assert!(Function::QueryClaim.check_args(&one).is_ok());
        assert!(Function::CreateClaim.check_args(&one).is_err());
        assert!(Function::QueryAllClaims.check_args(&one).is_ok());
    }
}
