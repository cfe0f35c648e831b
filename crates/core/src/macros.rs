/// Declares a closed enum whose variants are selected by a fixed string key.
///
/// Generates `ALL`, `from_key` (None for unknown keys) and `key`.
macro_rules! key_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Parses a key. Unknown keys return None.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $( $key => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// The key this variant is selected by.
            pub fn key(self) -> &'static str {
                match self {
                    $( $name::$variant => $key, )+
                }
            }
        }
    };
}

/// Declares a closed icon table with a single fallback icon.
///
/// Variant names are the icon keys authors write in content (`CheckCircle`),
/// the literal is the rendered symbol name (`check-circle`).
macro_rules! icon_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident (fallback = $fallback:ident) {
            $( $variant:ident => $symbol:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $variant ),+
        }

        impl $name {
            /// Every icon in this table, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Icon used for unknown or missing keys.
            pub const FALLBACK: $name = $name::$fallback;

            /// Exact lookup. Unknown keys return None.
            pub fn lookup(key: &str) -> Option<Self> {
                match key {
                    $( stringify!($variant) => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// The key authors use to select this icon.
            pub fn key(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }

            /// The rendered symbol name.
            pub fn symbol(self) -> &'static str {
                match self {
                    $( $name::$variant => $symbol, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::FALLBACK
            }
        }
    };
}
