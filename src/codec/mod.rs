mod macros;
pub mod serde_description;

use crate::utils::error::{ExtkitError, Result};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_SEPARATORS: &[char] = &[';', ','];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantInfo<T> {
    pub variant: T,
    pub name: &'static str,
    pub value: i32,
    pub description: Option<&'static str>,
}

impl<T> VariantInfo<T> {
    /// 空字串的描述視同未設定
    pub fn tag(&self) -> Option<&'static str> {
        self.description.filter(|desc| !desc.is_empty())
    }

    pub fn resolved_description(&self) -> &'static str {
        self.tag().unwrap_or(self.name)
    }
}

/// 第一個值為 0 的成員，否則取第一個宣告的成員
pub const fn zero_variant_of<T: Copy>(table: &[VariantInfo<T>]) -> T {
    let mut index = 0;
    while index < table.len() {
        if table[index].value == 0 {
            return table[index].variant;
        }
        index += 1;
    }
    table[0].variant
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantInput<'a, T> {
    Variant(T),
    Text(&'a str),
    Null,
}

impl<'a, T> From<&'a str> for VariantInput<'a, T> {
    fn from(text: &'a str) -> Self {
        VariantInput::Text(text)
    }
}

impl<'a, T> From<Option<&'a str>> for VariantInput<'a, T> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(VariantInput::Null, VariantInput::Text)
    }
}

/// `VARIANTS` 必須依宣告順序列出所有成員
pub trait EnumCodec: Copy + PartialEq + Sized + 'static {
    const TYPE_NAME: &'static str;
    const VARIANTS: &'static [VariantInfo<Self>];
    const ZERO: Self;

    fn name(&self) -> &'static str;
    fn to_int(&self) -> i32;
    fn description_tag(&self) -> Option<&'static str>;

    fn description(&self) -> &'static str {
        self.description_tag()
            .filter(|desc| !desc.is_empty())
            .unwrap_or_else(|| self.name())
    }

    fn count() -> usize {
        Self::VARIANTS.len()
    }

    fn variants() -> impl Iterator<Item = Self> {
        Self::VARIANTS.iter().map(|info| info.variant)
    }

    // 重複的值保留第一個宣告的名稱
    fn to_dictionary_by_value() -> HashMap<i32, &'static str> {
        let mut map = HashMap::with_capacity(Self::VARIANTS.len());
        for info in Self::VARIANTS {
            map.entry(info.value).or_insert(info.name);
        }
        map
    }

    fn to_sorted_map_by_name() -> BTreeMap<&'static str, i32> {
        Self::VARIANTS
            .iter()
            .map(|info| (info.name, info.value))
            .collect()
    }

    fn to_ordered_name_list() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Self::VARIANTS.iter().map(|info| info.name).collect();
        names.sort_unstable();
        names
    }

    fn to_description_map_by_value() -> HashMap<i32, &'static str> {
        let mut map = HashMap::with_capacity(Self::VARIANTS.len());
        for info in Self::VARIANTS {
            map.entry(info.value)
                .or_insert_with(|| info.resolved_description());
        }
        map
    }

    fn to_description_list() -> Vec<&'static str> {
        Self::VARIANTS
            .iter()
            .map(VariantInfo::resolved_description)
            .collect()
    }

    fn find_by_description(text: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|info| info.tag() == Some(text))
            .or_else(|| Self::VARIANTS.iter().find(|info| info.name == text))
            .map(|info| info.variant)
    }

    fn from_description(text: &str) -> Self {
        Self::from_description_or(text, Self::ZERO)
    }

    fn from_description_or(text: &str, fallback: Self) -> Self {
        match Self::find_by_description(text) {
            Some(variant) => variant,
            None => {
                tracing::trace!(
                    enum_type = Self::TYPE_NAME,
                    text,
                    "no description or name match, using fallback"
                );
                fallback
            }
        }
    }

    fn to_description(name: &str) -> Result<&'static str> {
        Self::from_name(name).map(|variant| variant.description())
    }

    fn from_int_value(value: i32) -> Result<Self> {
        Self::VARIANTS
            .iter()
            .find(|info| info.value == value)
            .map(|info| info.variant)
            .ok_or_else(|| {
                ExtkitError::invalid_argument(format!(
                    "no variant of {} has value {}",
                    Self::TYPE_NAME,
                    value
                ))
            })
    }

    fn from_int_value_or(value: i32, fallback: Self) -> Self {
        Self::from_int_value(value).unwrap_or(fallback)
    }

    fn from_name(name: &str) -> Result<Self> {
        Self::VARIANTS
            .iter()
            .find(|info| info.name == name)
            .map(|info| info.variant)
            .ok_or_else(|| {
                tracing::debug!(enum_type = Self::TYPE_NAME, name, "unknown variant name");
                ExtkitError::invalid_argument(format!(
                    "'{}' is not a variant of {}",
                    name,
                    Self::TYPE_NAME
                ))
            })
    }

    fn try_from_name(name: &str, default: Option<Self>) -> Option<Self> {
        let name = name.trim();
        Self::VARIANTS
            .iter()
            .find(|info| info.name.eq_ignore_ascii_case(name))
            .map(|info| info.variant)
            .or(default)
    }

    fn to_enum(value: Option<&str>, fallback: Self) -> Self {
        value
            .and_then(|text| Self::try_from_name(text, None))
            .unwrap_or(fallback)
    }

    fn parse_to_variants<'a>(input: impl Into<VariantInput<'a, Self>>) -> Result<Vec<Self>> {
        Self::parse_to_variants_with(input, DEFAULT_SEPARATORS)
    }

    // 空白的 token 會被略過，但至少要剩下一個
    fn parse_to_variants_with<'a>(
        input: impl Into<VariantInput<'a, Self>>,
        separators: &[char],
    ) -> Result<Vec<Self>> {
        let text = match input.into() {
            VariantInput::Variant(variant) => return Ok(vec![variant]),
            VariantInput::Text(text) if !text.is_empty() => text,
            VariantInput::Text(_) | VariantInput::Null => {
                return Err(ExtkitError::invalid_argument(format!(
                    "cannot parse {} from empty input",
                    Self::TYPE_NAME
                )))
            }
        };

        let variants = text
            .split(|c: char| separators.contains(&c))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                Self::try_from_name(token, None).ok_or_else(|| {
                    ExtkitError::invalid_argument(format!(
                        "'{}' is not a variant of {}",
                        token,
                        Self::TYPE_NAME
                    ))
                })
            })
            .collect::<Result<Vec<Self>>>()?;

        if variants.is_empty() {
            return Err(ExtkitError::invalid_argument(format!(
                "'{}' contains no {} names",
                text,
                Self::TYPE_NAME
            )));
        }
        Ok(variants)
    }

    /// 每個候選字串先比對所有成員的描述，再比對名稱（不分大小寫），才換下一個候選
    fn from_unknown(default: Self, candidates: &[&str]) -> Self {
        for candidate in candidates {
            if let Some(info) = Self::VARIANTS
                .iter()
                .find(|info| info.tag() == Some(*candidate))
            {
                return info.variant;
            }
            if let Some(info) = Self::VARIANTS
                .iter()
                .find(|info| info.name.eq_ignore_ascii_case(candidate))
            {
                return info.variant;
            }
        }
        tracing::trace!(
            enum_type = Self::TYPE_NAME,
            candidates = candidates.len(),
            "no candidate matched, using default"
        );
        default
    }
}
