//! Symbol vocabulary of the registry
//!
//! Each set below is one line of [`SYMBOL_ENTRIES`]. The order of that list
//! matters: later entries overwrite earlier ones, so generic vocabularies
//! come first and the exceptions that reclassify some of their members come
//! last.

use phf::{Set, phf_set};

use super::types::{Glyphs, SecondaryKind, SymbolEntry};
use crate::delimiter::{LEFT_RIGHT_PAIRS, METRIC_FENCES, NEUTRAL_FENCES, TOP_BOTTOM_PAIRS};
use crate::types::{SemanticFont, SemanticRole, SemanticType};
use crate::unicode::Alphabet;

/// Comma separators, including the invisible separator U+2063.
static COMMAS: Set<&str> = phf_set! {
    ",",
    "\u{2063}",
    "\u{ff0c}", // ，
    "\u{fe50}", // ﹐
};

/// Semicolons.
static SEMICOLONS: Set<&str> = phf_set! {
    ";",
    "\u{ff1b}", // ；
    "\u{fe54}", // ﹔
    "\u{204f}", // ⁏
};

/// Colons.
static COLONS: Set<&str> = phf_set! {
    ":",
    "\u{ff1a}", // ：
    "\u{fe55}", // ﹕
    "\u{fe13}", // ︓
};

/// Full stops.
static FULL_STOPS: Set<&str> = phf_set! {
    ".",
    "\u{ff0e}", // ．
    "\u{fe52}", // ﹒
};

/// Ellipses.
static ELLIPSES: Set<&str> = phf_set! {
    "\u{2026}", // …
    "\u{22ee}", // ⋮
    "\u{22ef}", // ⋯
    "\u{22f0}", // ⋰
    "\u{22f1}", // ⋱
    "\u{2025}", // ‥
    "\u{fe19}", // ︙
    "\u{fe30}", // ︰
};

/// Question marks.
static QUESTION_MARKS: Set<&str> = phf_set! {
    "?",
    "\u{bf}", // ¿
    "\u{ff1f}", // ？
};

/// Other punctuation.
static OTHER_PUNCTUATION: Set<&str> = phf_set! {
    "\"",
    "#",
    "%",
    "&",
    "@",
    "\\",
    "\u{a7}", // §
    "\u{b6}", // ¶
    "\u{2020}", // †
    "\u{2021}", // ‡
    "\u{2030}", // ‰
    "\u{2031}", // ‱
};

/// Additive operators, including the invisible plus U+2064.
static ADDITIONS: Set<&str> = phf_set! {
    "+",
    "\u{b1}", // ±
    "\u{2213}", // ∓
    "\u{2214}", // ∔
    "\u{2295}", // ⊕
    "\u{229e}", // ⊞
    "\u{ff0b}", // ＋
    "\u{fe62}", // ﹢
    "\u{2064}",
};

/// The ASCII hyphen-minus doubles as a bar accent.
static HYPHEN_MINUS: Set<&str> = phf_set! {
    "-",
};

/// Subtractions.
static SUBTRACTIONS: Set<&str> = phf_set! {
    "\u{2212}", // −
    "\u{2238}", // ∸
    "\u{2296}", // ⊖
    "\u{229f}", // ⊟
    "\u{ff0d}", // －
    "\u{fe63}", // ﹣
};

/// Dashes.
static DASHES: Set<&str> = phf_set! {
    "\u{2010}", // ‐
    "\u{2011}", // ‑
    "\u{2012}", // ‒
    "\u{2013}", // –
    "\u{2014}", // —
    "\u{2015}", // ―
};

/// Multiplicative operators, including the invisible times U+2062.
static MULTIPLICATIONS: Set<&str> = phf_set! {
    "\u{d7}", // ×
    "\u{b7}", // ·
    "\u{22c5}", // ⋅
    "\u{2219}", // ∙
    "\u{2217}", // ∗
    "*",
    "\u{2297}", // ⊗
    "\u{2299}", // ⊙
    "\u{2218}", // ∘
    "\u{22c6}", // ⋆
    "\u{2a2f}", // ⨯
    "\u{2715}", // ✕
    "\u{2716}", // ✖
    "\u{22a0}", // ⊠
    "\u{22a1}", // ⊡
    "\u{2981}", // ⦁
    "\u{2022}", // •
    "\u{204e}", // ⁎
    "\u{ff0a}", // ＊
    "\u{22c9}", // ⋉
    "\u{22ca}", // ⋊
    "\u{2062}",
};

/// Divisions.
static DIVISIONS: Set<&str> = phf_set! {
    "\u{f7}", // ÷
    "/",
    "\u{2215}", // ∕
    "\u{2298}", // ⊘
    "\u{2044}", // ⁄
    "\u{27cc}", // ⟌
    "\u{ff0f}", // ／
    "\u{29b8}", // ⦸
};

/// Logic operators.
static LOGIC_OPERATORS: Set<&str> = phf_set! {
    "\u{2227}", // ∧
    "\u{2228}", // ∨
    "\u{22bb}", // ⊻
    "\u{22bc}", // ⊼
    "\u{22bd}", // ⊽
    "\u{22cf}", // ⋏
    "\u{22ce}", // ⋎
    "\u{27d1}", // ⟑
    "\u{27c7}", // ⟇
};

/// Set operators.
static SET_OPERATORS: Set<&str> = phf_set! {
    "\u{222a}", // ∪
    "\u{2229}", // ∩
    "\u{2216}", // ∖
    "\u{228e}", // ⊎
    "\u{2293}", // ⊓
    "\u{2294}", // ⊔
    "\u{22d2}", // ⋒
    "\u{22d3}", // ⋓
    "\u{2a40}", // ⩀
};

/// Negations.
static NEGATIONS: Set<&str> = phf_set! {
    "\u{ac}", // ¬
    "\u{ffe2}", // ￢
    "\u{2310}", // ⌐
};

/// Prefix operators.
static PREFIX_OPERATORS: Set<&str> = phf_set! {
    "\u{2207}", // ∇
    "\u{2202}", // ∂
    "\u{2206}", // ∆
    "\u{221a}", // √
    "\u{221b}", // ∛
    "\u{221c}", // ∜
    "\u{2201}", // ∁
    "\u{2200}", // ∀
    "\u{2203}", // ∃
    "\u{2204}", // ∄
};

/// Postfix operators.
static POSTFIX_OPERATORS: Set<&str> = phf_set! {
    "!",
    "\u{203c}", // ‼
};

/// Primes.
static PRIMES: Set<&str> = phf_set! {
    "\u{2032}", // ′
    "\u{2033}", // ″
    "\u{2034}", // ‴
    "\u{2057}", // ⁗
    "'",
    "\u{2035}", // ‵
    "\u{2036}", // ‶
    "\u{2037}", // ‷
    "\u{ff07}", // ＇
};

/// Degrees.
static DEGREES: Set<&str> = phf_set! {
    "\u{b0}", // °
};

/// The invisible function application U+2061.
static FUNCTION_APPLICATIONS: Set<&str> = phf_set! {
    "\u{2061}",
};

/// Equalities.
static EQUALITIES: Set<&str> = phf_set! {
    "=",
    "\u{2261}", // ≡
    "\u{2245}", // ≅
    "\u{2248}", // ≈
    "\u{2243}", // ≃
    "\u{2254}", // ≔
    "\u{2255}", // ≕
    "\u{225d}", // ≝
    "\u{2250}", // ≐
    "\u{224d}", // ≍
    "\u{2251}", // ≑
    "\u{2252}", // ≒
    "\u{2253}", // ≓
    "\u{2256}", // ≖
    "\u{2257}", // ≗
    "\u{2258}", // ≘
    "\u{2259}", // ≙
    "\u{225a}", // ≚
    "\u{225b}", // ≛
    "\u{225c}", // ≜
    "\u{225e}", // ≞
    "\u{225f}", // ≟
    "\u{2263}", // ≣
    "\u{2a75}", // ⩵
    "\u{2a76}", // ⩶
    "\u{ff1d}", // ＝
    "\u{221d}", // ∝
    "\u{224a}", // ≊
    "\u{224b}", // ≋
    "\u{2a66}", // ⩦
    "\u{2a74}", // ⩴
};

/// Tilde relations.
static TILDE_RELATIONS: Set<&str> = phf_set! {
    "\u{223c}", // ∼
    "\u{223d}", // ∽
};

/// Inequalities.
static INEQUALITIES: Set<&str> = phf_set! {
    "<",
    ">",
    "\u{2264}", // ≤
    "\u{2265}", // ≥
    "\u{2260}", // ≠
    "\u{226a}", // ≪
    "\u{226b}", // ≫
    "\u{2272}", // ≲
    "\u{2273}", // ≳
    "\u{226e}", // ≮
    "\u{226f}", // ≯
    "\u{2270}", // ≰
    "\u{2271}", // ≱
    "\u{2266}", // ≦
    "\u{2267}", // ≧
    "\u{2a7d}", // ⩽
    "\u{2a7e}", // ⩾
    "\u{227a}", // ≺
    "\u{227b}", // ≻
    "\u{227c}", // ≼
    "\u{227d}", // ≽
    "\u{2268}", // ≨
    "\u{2269}", // ≩
    "\u{2241}", // ≁
    "\u{2249}", // ≉
    "\u{2262}", // ≢
    "\u{2244}", // ≄
    "\u{2247}", // ≇
    "\u{22d8}", // ⋘
    "\u{22d9}", // ⋙
    "\u{2276}", // ≶
    "\u{2277}", // ≷
    "\u{2a87}", // ⪇
    "\u{2a88}", // ⪈
    "\u{2a85}", // ⪅
    "\u{2a86}", // ⪆
    "\u{ff1c}", // ＜
    "\u{ff1e}", // ＞
    "\u{22d6}", // ⋖
    "\u{22d7}", // ⋗
    "\u{2274}", // ≴
    "\u{2275}", // ≵
    "\u{2280}", // ⊀
    "\u{2281}", // ⊁
};

/// Set relations.
static SET_RELATIONS: Set<&str> = phf_set! {
    "\u{2282}", // ⊂
    "\u{2283}", // ⊃
    "\u{2286}", // ⊆
    "\u{2287}", // ⊇
    "\u{2284}", // ⊄
    "\u{2285}", // ⊅
    "\u{2288}", // ⊈
    "\u{2289}", // ⊉
    "\u{228a}", // ⊊
    "\u{228b}", // ⊋
    "\u{228f}", // ⊏
    "\u{2290}", // ⊐
    "\u{2291}", // ⊑
    "\u{2292}", // ⊒
    "\u{22d0}", // ⋐
    "\u{22d1}", // ⋑
    "\u{2ac5}", // ⫅
    "\u{2ac6}", // ⫆
    "\u{2acb}", // ⫋
    "\u{2acc}", // ⫌
    "\u{22e2}", // ⋢
    "\u{22e3}", // ⋣
};

/// Element relations.
static ELEMENT_RELATIONS: Set<&str> = phf_set! {
    "\u{2208}", // ∈
    "\u{2209}", // ∉
    "\u{220b}", // ∋
    "\u{220c}", // ∌
    "\u{220a}", // ∊
    "\u{220d}", // ∍
    "\u{22f2}", // ⋲
    "\u{22f3}", // ⋳
    "\u{22f4}", // ⋴
    "\u{22f5}", // ⋵
    "\u{22f6}", // ⋶
    "\u{22f7}", // ⋷
    "\u{22f8}", // ⋸
    "\u{22f9}", // ⋹
    "\u{22fa}", // ⋺
    "\u{22fb}", // ⋻
    "\u{22fc}", // ⋼
    "\u{22fd}", // ⋽
    "\u{22fe}", // ⋾
    "\u{22ff}", // ⋿
};

/// Arrows.
static ARROWS: Set<&str> = phf_set! {
    "\u{2192}", // →
    "\u{2190}", // ←
    "\u{2194}", // ↔
    "\u{21d2}", // ⇒
    "\u{21d0}", // ⇐
    "\u{21d4}", // ⇔
    "\u{21a6}", // ↦
    "\u{27f6}", // ⟶
    "\u{27f5}", // ⟵
    "\u{27f7}", // ⟷
    "\u{27f9}", // ⟹
    "\u{27f8}", // ⟸
    "\u{27fa}", // ⟺
    "\u{27fc}", // ⟼
    "\u{2191}", // ↑
    "\u{2193}", // ↓
    "\u{2195}", // ↕
    "\u{2197}", // ↗
    "\u{2198}", // ↘
    "\u{2199}", // ↙
    "\u{2196}", // ↖
    "\u{21d1}", // ⇑
    "\u{21d3}", // ⇓
    "\u{21d5}", // ⇕
    "\u{21aa}", // ↪
    "\u{21a9}", // ↩
    "\u{21bc}", // ↼
    "\u{21bd}", // ↽
    "\u{21c0}", // ⇀
    "\u{21c1}", // ⇁
    "\u{21cc}", // ⇌
    "\u{21cb}", // ⇋
    "\u{21a0}", // ↠
    "\u{219e}", // ↞
    "\u{21a3}", // ↣
    "\u{21a2}", // ↢
    "\u{21dd}", // ⇝
    "\u{21dc}", // ⇜
    "\u{27ff}", // ⟿
    "\u{219a}", // ↚
    "\u{219b}", // ↛
    "\u{21ae}", // ↮
    "\u{21cd}", // ⇍
    "\u{21ce}", // ⇎
    "\u{21cf}", // ⇏
    "\u{21c4}", // ⇄
    "\u{21c6}", // ⇆
    "\u{21c9}", // ⇉
    "\u{21c7}", // ⇇
    "\u{21f6}", // ⇶
    "\u{21bb}", // ↻
    "\u{21ba}", // ↺
    "\u{2933}", // ⤳
};

/// Other relations.
static OTHER_RELATIONS: Set<&str> = phf_set! {
    "\u{22a2}", // ⊢
    "\u{22a3}", // ⊣
    "\u{22a5}", // ⊥
    "\u{22a8}", // ⊨
    "\u{22a9}", // ⊩
    "\u{22aa}", // ⊪
    "\u{22ab}", // ⊫
    "\u{22ac}", // ⊬
    "\u{22ad}", // ⊭
    "\u{22ae}", // ⊮
    "\u{22af}", // ⊯
    "\u{2224}", // ∤
    "\u{2226}", // ∦
    "\u{22c8}", // ⋈
    "\u{226c}", // ≬
    "\u{22b2}", // ⊲
    "\u{22b3}", // ⊳
    "\u{22b4}", // ⊴
    "\u{22b5}", // ⊵
    "\u{22ea}", // ⋪
    "\u{22eb}", // ⋫
    "\u{22ec}", // ⋬
    "\u{22ed}", // ⋭
    "\u{2234}", // ∴
    "\u{2235}", // ∵
    "\u{2237}", // ∷
    "\u{223a}", // ∺
    "\u{224e}", // ≎
    "\u{224f}", // ≏
    "\u{2a73}", // ⩳
};

/// Sums.
static SUMS: Set<&str> = phf_set! {
    "\u{2211}", // ∑
    "\u{220f}", // ∏
    "\u{2210}", // ∐
    "\u{2a01}", // ⨁
    "\u{2a02}", // ⨂
    "\u{2a00}", // ⨀
    "\u{2a04}", // ⨄
    "\u{2a06}", // ⨆
    "\u{2a05}", // ⨅
    "\u{22c0}", // ⋀
    "\u{22c1}", // ⋁
    "\u{22c2}", // ⋂
    "\u{22c3}", // ⋃
    "\u{2a09}", // ⨉
    "\u{2140}", // ⅀
    "\u{2a0a}", // ⨊
};

/// Integrals.
static INTEGRALS: Set<&str> = phf_set! {
    "\u{222b}", // ∫
    "\u{222c}", // ∬
    "\u{222d}", // ∭
    "\u{222e}", // ∮
    "\u{222f}", // ∯
    "\u{2230}", // ∰
    "\u{2231}", // ∱
    "\u{2232}", // ∲
    "\u{2233}", // ∳
    "\u{2a0c}", // ⨌
    "\u{2a0d}", // ⨍
    "\u{2a0e}", // ⨎
    "\u{2a0f}", // ⨏
    "\u{2a10}", // ⨐
    "\u{2a11}", // ⨑
    "\u{2a12}", // ⨒
    "\u{2a13}", // ⨓
    "\u{2a14}", // ⨔
    "\u{2a15}", // ⨕
    "\u{2a16}", // ⨖
    "\u{2a17}", // ⨗
    "\u{2a18}", // ⨘
    "\u{2a19}", // ⨙
    "\u{2a1a}", // ⨚
    "\u{2a1b}", // ⨛
    "\u{2a1c}", // ⨜
};

/// Limit functions.
static LIMIT_FUNCTIONS: Set<&str> = phf_set! {
    "lim",
    "limsup",
    "liminf",
    "sup",
    "inf",
    "max",
    "min",
    "injlim",
    "projlim",
    "lim sup",
    "lim inf",
    "inj lim",
    "proj lim",
    "argmax",
    "argmin",
};

/// Prefix functions.
static PREFIX_FUNCTIONS: Set<&str> = phf_set! {
    "sin",
    "cos",
    "tan",
    "cot",
    "sec",
    "csc",
    "sinh",
    "cosh",
    "tanh",
    "coth",
    "sech",
    "csch",
    "arcsin",
    "arccos",
    "arctan",
    "arccot",
    "arcsec",
    "arccsc",
    "arsinh",
    "arcosh",
    "artanh",
    "arcoth",
    "arsech",
    "arcsch",
    "log",
    "ln",
    "lg",
    "exp",
    "det",
    "dim",
    "ker",
    "deg",
    "gcd",
    "lcm",
    "hom",
    "arg",
    "Pr",
    "tr",
    "Tr",
    "rank",
    "sgn",
    "Re",
    "Im",
    "erf",
    "diag",
    "cosec",
};

/// Bar accents.
static BAR_ACCENTS: Set<&str> = phf_set! {
    "\u{af}", // ¯
    "\u{2c9}", // ˉ
    "\u{203e}", // ‾
    "_",
    "\u{2017}", // ‗
    "\u{305}",
    "\u{332}",
};

/// Tilde accents.
static TILDE_ACCENTS: Set<&str> = phf_set! {
    "~",
    "\u{2dc}", // ˜
    "\u{303}",
    "\u{2053}", // ⁓
};

/// Other accents.
static OTHER_ACCENTS: Set<&str> = phf_set! {
    "^",
    "\u{2c6}", // ˆ
    "\u{2c7}", // ˇ
    "\u{2d8}", // ˘
    "\u{2d9}", // ˙
    "\u{a8}", // ¨
    "`",
    "\u{b4}", // ´
    "\u{b8}", // ¸
    "\u{2da}", // ˚
    "\u{2dd}", // ˝
    "\u{300}",
    "\u{301}",
    "\u{302}",
    "\u{306}",
    "\u{307}",
    "\u{308}",
    "\u{30a}",
    "\u{30b}",
    "\u{30c}",
    "\u{20d6}",
    "\u{20d7}",
    "\u{20e1}",
};

/// Other letters.
static OTHER_LETTERS: Set<&str> = phf_set! {
    "\u{221e}", // ∞
    "\u{2135}", // ℵ
    "\u{2136}", // ℶ
    "\u{2137}", // ℷ
    "\u{2138}", // ℸ
    "\u{210f}", // ℏ
    "\u{2113}", // ℓ
    "\u{2118}", // ℘
    "\u{2205}", // ∅
    "\u{22a4}", // ⊤
    "\u{2127}", // ℧
    "\u{2107}", // ℇ
    "\u{c5}", // Å
    "\u{3a9}", // Ω
};

/// Dotless letters.
static DOTLESS_LETTERS: Set<&str> = phf_set! {
    "\u{131}", // ı
    "\u{237}", // ȷ
};

/// Italic dotless letters.
static ITALIC_DOTLESS_LETTERS: Set<&str> = phf_set! {
    "\u{1d6a4}", // 𝚤
    "\u{1d6a5}", // 𝚥
};

/// Greek variants.
static GREEK_VARIANTS: Set<&str> = phf_set! {
    "\u{3f5}", // ϵ
    "\u{3d1}", // ϑ
    "\u{3f0}", // ϰ
    "\u{3d5}", // ϕ
    "\u{3f1}", // ϱ
    "\u{3d6}", // ϖ
    "\u{3f4}", // ϴ
    "\u{3d0}", // ϐ
    "\u{3d2}", // ϒ
    "\u{3dd}", // ϝ
};

/// Vulgar fractions.
static VULGAR_FRACTIONS: Set<&str> = phf_set! {
    "\u{bc}", // ¼
    "\u{bd}", // ½
    "\u{be}", // ¾
    "\u{2150}", // ⅐
    "\u{2151}", // ⅑
    "\u{2152}", // ⅒
    "\u{2153}", // ⅓
    "\u{2154}", // ⅔
    "\u{2155}", // ⅕
    "\u{2156}", // ⅖
    "\u{2157}", // ⅗
    "\u{2158}", // ⅘
    "\u{2159}", // ⅙
    "\u{215a}", // ⅚
    "\u{215b}", // ⅛
    "\u{215c}", // ⅜
    "\u{215d}", // ⅝
    "\u{215e}", // ⅞
};

/// Number sets.
static NUMBER_SETS: Set<&str> = phf_set! {
    "\u{2102}", // ℂ
    "\u{210d}", // ℍ
    "\u{2115}", // ℕ
    "\u{2119}", // ℙ
    "\u{211a}", // ℚ
    "\u{211d}", // ℝ
    "\u{2124}", // ℤ
};

/// Simple functions.
static SIMPLE_FUNCTIONS: Set<&str> = phf_set! {
    "f",
    "g",
    "h",
    "F",
    "G",
    "H",
};

/// Italic simple functions.
static ITALIC_SIMPLE_FUNCTIONS: Set<&str> = phf_set! {
    "\u{1d453}", // 𝑓
    "\u{1d454}", // 𝑔
    "\u{210e}", // ℎ
};

/// Double struck letters.
static DOUBLE_STRUCK_LETTERS: Set<&str> = phf_set! {
    "\u{2147}", // ⅇ
    "\u{2148}", // ⅈ
    "\u{2149}", // ⅉ
};

/// Double struck differentials.
static DOUBLE_STRUCK_DIFFERENTIALS: Set<&str> = phf_set! {
    "\u{2145}", // ⅅ
    "\u{2146}", // ⅆ
};

const fn entry(glyphs: Glyphs, node_type: SemanticType, role: SemanticRole) -> SymbolEntry {
    SymbolEntry {
        glyphs,
        node_type,
        role,
        font: None,
        secondary: None,
    }
}

const fn with_font(mut entry: SymbolEntry, font: SemanticFont) -> SymbolEntry {
    entry.font = Some(font);
    entry
}

const fn with_secondary(mut entry: SymbolEntry, secondary: SecondaryKind) -> SymbolEntry {
    entry.secondary = Some(secondary);
    entry
}

use Glyphs::{Keys, Set as Of, Values};
use SemanticRole as R;
use SemanticType as T;

/// Ordered registry definition, applied after the alphabet intervals.
pub static SYMBOL_ENTRIES: [SymbolEntry; 51] = [
    // Punctuation
    entry(Of(&COMMAS), T::Punctuation, R::Comma),
    entry(Of(&SEMICOLONS), T::Punctuation, R::Semicolon),
    entry(Of(&COLONS), T::Punctuation, R::Colon),
    entry(Of(&FULL_STOPS), T::Punctuation, R::FullStop),
    entry(Of(&ELLIPSES), T::Punctuation, R::Ellipsis),
    entry(Of(&QUESTION_MARKS), T::Punctuation, R::Question),
    entry(Of(&OTHER_PUNCTUATION), T::Punctuation, R::Unknown),
    // Fences
    entry(Keys(&LEFT_RIGHT_PAIRS), T::Fence, R::Open),
    entry(Values(&LEFT_RIGHT_PAIRS), T::Fence, R::Close),
    entry(Keys(&TOP_BOTTOM_PAIRS), T::Fence, R::Top),
    entry(Values(&TOP_BOTTOM_PAIRS), T::Fence, R::Bottom),
    entry(Of(&NEUTRAL_FENCES), T::Fence, R::Neutral),
    entry(Of(&METRIC_FENCES), T::Fence, R::Metric),
    // Operators
    entry(Of(&ADDITIONS), T::Operator, R::Addition),
    with_secondary(
        entry(Of(&HYPHEN_MINUS), T::Operator, R::Subtraction),
        SecondaryKind::Bar,
    ),
    entry(Of(&SUBTRACTIONS), T::Operator, R::Subtraction),
    with_secondary(entry(Of(&DASHES), T::Operator, R::Dash), SecondaryKind::Bar),
    entry(Of(&MULTIPLICATIONS), T::Operator, R::Multiplication),
    entry(Of(&DIVISIONS), T::Operator, R::Division),
    entry(Of(&LOGIC_OPERATORS), T::Operator, R::Logic),
    entry(Of(&SET_OPERATORS), T::Operator, R::Set),
    entry(Of(&NEGATIONS), T::Operator, R::Negation),
    entry(Of(&PREFIX_OPERATORS), T::Operator, R::PrefixOp),
    entry(Of(&POSTFIX_OPERATORS), T::Operator, R::PostfixOp),
    entry(Of(&PRIMES), T::Operator, R::Prime),
    entry(Of(&DEGREES), T::Operator, R::Degree),
    entry(Of(&FUNCTION_APPLICATIONS), T::Operator, R::Application),
    // Relations
    entry(Of(&EQUALITIES), T::Relation, R::Equality),
    with_secondary(
        entry(Of(&TILDE_RELATIONS), T::Relation, R::Equality),
        SecondaryKind::Tilde,
    ),
    entry(Of(&INEQUALITIES), T::Relation, R::Inequality),
    entry(Of(&SET_RELATIONS), T::Relation, R::Set),
    entry(Of(&ELEMENT_RELATIONS), T::Relation, R::Element),
    entry(Of(&ARROWS), T::Relation, R::Arrow),
    entry(Of(&OTHER_RELATIONS), T::Relation, R::Unknown),
    // Large operators and functions
    entry(Of(&SUMS), T::LargeOp, R::Sum),
    entry(Of(&INTEGRALS), T::LargeOp, R::Integral),
    entry(Of(&LIMIT_FUNCTIONS), T::Function, R::LimFunc),
    entry(Of(&PREFIX_FUNCTIONS), T::Function, R::PrefixFunc),
    // Accents
    with_secondary(
        entry(Of(&BAR_ACCENTS), T::Accent, R::Unknown),
        SecondaryKind::Bar,
    ),
    with_secondary(
        entry(Of(&TILDE_ACCENTS), T::Accent, R::Unknown),
        SecondaryKind::Tilde,
    ),
    entry(Of(&OTHER_ACCENTS), T::Accent, R::Unknown),
    // Other letters and numbers
    entry(Of(&OTHER_LETTERS), T::Identifier, R::OtherLetter),
    entry(Of(&VULGAR_FRACTIONS), T::Number, R::OtherNumber),
    // Exceptions
    with_font(
        entry(Of(&NUMBER_SETS), T::Identifier, R::NumberSet),
        SemanticFont::DoubleStruck,
    ),
    entry(Of(&SIMPLE_FUNCTIONS), T::Identifier, R::SimpleFunc),
    with_font(
        entry(Of(&ITALIC_SIMPLE_FUNCTIONS), T::Identifier, R::SimpleFunc),
        SemanticFont::Italic,
    ),
    with_font(
        entry(Of(&DOUBLE_STRUCK_LETTERS), T::Identifier, R::LatinLetter),
        SemanticFont::DoubleStruckItalic,
    ),
    with_secondary(
        with_font(
            entry(Of(&DOUBLE_STRUCK_DIFFERENTIALS), T::Identifier, R::LatinLetter),
            SemanticFont::DoubleStruckItalic,
        ),
        SecondaryKind::Differential,
    ),
    entry(Of(&GREEK_VARIANTS), T::Identifier, R::GreekLetter),
    entry(Of(&DOTLESS_LETTERS), T::Identifier, R::LatinLetter),
    with_font(
        entry(Of(&ITALIC_DOTLESS_LETTERS), T::Identifier, R::LatinLetter),
        SemanticFont::Italic,
    ),
];

/// Positions inside every interval of an alphabet that are reclassified away
/// from the alphabet default. The interval font is kept.
pub static INTERVAL_OVERRIDES: [(Alphabet, u32, SemanticType, SemanticRole); 2] = [
    // nabla
    (Alphabet::GreekSmall, 0, T::Operator, R::PrefixOp),
    // partial differential
    (Alphabet::GreekSmall, 26, T::Operator, R::PrefixOp),
];

/// Positions inside every interval of an alphabet tagged with a secondary
/// fact.
pub static INTERVAL_SECONDARIES: [(Alphabet, u32, SecondaryKind); 1] =
    [(Alphabet::LatinSmall, 3, SecondaryKind::Differential)];
