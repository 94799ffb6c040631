/// 宣告 `#[repr(i32)]` enum 及其對照表，`=>` 後面是選填的描述
///
/// ```
/// extkit::described_enum! {
///     pub enum Ones {
///         Zero = 0,
///         One = 1,
///         Eight = 8 => "eight",
///     }
/// }
///
/// use extkit::codec::EnumCodec;
/// assert_eq!(Ones::from_description("eight"), Ones::Eight);
/// assert_eq!(Ones::Eight.to_string(), "eight");
/// ```
#[macro_export]
macro_rules! described_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(= $value:expr)? $(=> $desc:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant $(= $value)?
            ),+
        }

        impl $crate::codec::EnumCodec for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            const VARIANTS: &'static [$crate::codec::VariantInfo<Self>] = &[
                $(
                    $crate::codec::VariantInfo {
                        variant: $name::$variant,
                        name: stringify!($variant),
                        value: $name::$variant as i32,
                        description: $crate::__described_enum_tag!($($desc)?),
                    }
                ),+
            ];

            const ZERO: Self = $crate::codec::zero_variant_of(Self::VARIANTS);

            fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }

            fn to_int(&self) -> i32 {
                *self as i32
            }

            fn description_tag(&self) -> Option<&'static str> {
                match self {
                    $( $name::$variant => $crate::__described_enum_tag!($($desc)?), )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::codec::EnumCodec::description(self))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __described_enum_tag {
    () => {
        None
    };
    ($desc:literal) => {
        Some($desc)
    };
}
