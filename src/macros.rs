//! Macros to reduce boilerplate in the codebase

/// Generate `Display` and `FromStr` for enums that travel over the wire as
/// fixed upper-case words (issue status, priority, role).
///
/// Parsing is case-insensitive and ignores surrounding whitespace, so a
/// user typing `fixed` at a prompt gets `FIXED`.
///
/// # Usage
///
/// ```rust,ignore
/// enum_display_fromstr!(
///     IssueStatus,
///     "issue status",
///     {
///         New => "NEW",
///         Fixed => "FIXED",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $kind:expr,
        { $($variant:ident => $str:expr),+ $(,)? }
    ) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$($enum_name::$variant),+];

            /// The wire representation of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($enum_name::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::IssueDeskError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str) {
                        return Ok($enum_name::$variant);
                    }
                )+
                Err($crate::error::IssueDeskError::InvalidValue {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }
    };
}
