/// колонка UnicodeData.txt
/// порядок и названия - по UAX #44, раздел 5.3
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Field
{
    /// код символа
    Codepoint = 0,
    /// название
    Name = 1,
    /// категория символа (general category)
    GeneralCategory = 2,
    /// класс канонического комбинирования (canonical combining class)
    CombiningClass = 3,
    /// класс направления (bidi class)
    BidiCategory = 4,
    /// декомпозиция и тег декомпозиции
    DecompositionMapping = 5,
    DecimalDigitValue = 6,
    DigitValue = 7,
    NumericValue = 8,
    /// "зеркальный" символ двунаправленого текста (bidi mirrored)
    Mirrored = 9,
    /// устарело с 6.2.0
    Unicode1Name = 10,
    /// устарело с 5.2.0
    CommentField = 11,
    /// соответствующая прописная буква
    UppercaseMapping = 12,
    /// соответствующая строчная буква
    LowercaseMapping = 13,
    /// соответствующая заглавная буква
    TitlecaseMapping = 14,
}

impl Field
{
    /// все колонки в порядке следования
    pub const ALL: [Field; 15] = [
        Self::Codepoint,
        Self::Name,
        Self::GeneralCategory,
        Self::CombiningClass,
        Self::BidiCategory,
        Self::DecompositionMapping,
        Self::DecimalDigitValue,
        Self::DigitValue,
        Self::NumericValue,
        Self::Mirrored,
        Self::Unicode1Name,
        Self::CommentField,
        Self::UppercaseMapping,
        Self::LowercaseMapping,
        Self::TitlecaseMapping,
    ];

    /// номер колонки, начиная с 0
    #[inline]
    pub const fn index(self) -> usize
    {
        self as usize
    }
}

impl core::fmt::Display for Field
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        let value = match self {
            Field::Codepoint => "Code_Point",
            Field::Name => "Name",
            Field::GeneralCategory => "General_Category",
            Field::CombiningClass => "Canonical_Combining_Class",
            Field::BidiCategory => "Bidi_Class",
            Field::DecompositionMapping => "Decomposition_Mapping",
            Field::DecimalDigitValue => "Numeric_Value (decimal)",
            Field::DigitValue => "Numeric_Value (digit)",
            Field::NumericValue => "Numeric_Value",
            Field::Mirrored => "Bidi_Mirrored",
            Field::Unicode1Name => "Unicode_1_Name",
            Field::CommentField => "ISO_Comment",
            Field::UppercaseMapping => "Simple_Uppercase_Mapping",
            Field::LowercaseMapping => "Simple_Lowercase_Mapping",
            Field::TitlecaseMapping => "Simple_Titlecase_Mapping",
        };

        write!(f, "{}", value)
    }
}
