//! Fence matching
//!
//! Decides which delimiters pair up in a flat run of siblings. Opening and
//! closing fences pair through the [`LEFT_RIGHT_PAIRS`] and
//! [`TOP_BOTTOM_PAIRS`] tables; neutral and metric bars only pair with an
//! identical glyph.
//!
//! [`match_fences`] runs the greedy stack algorithm over a run. A closing
//! fence that does not pair with the top of the stack is retried against the
//! entries below it, up to the configured depth, and otherwise degrades to
//! unmatched punctuation together with the fence it failed against.

use phf::{Map, Set, phf_map, phf_set};

use crate::types::SemanticRole;

/// Opening fences and the closing fence each one pairs with.
pub static LEFT_RIGHT_PAIRS: Map<&str, &str> = phf_map! {
    "(" => ")",
    "[" => "]",
    "{" => "}",
    "\u{2045}" => "\u{2046}", // ⁅ ⁆
    "\u{2329}" => "\u{232a}", // 〈 〉
    "\u{2768}" => "\u{2769}", // ❨ ❩
    "\u{276a}" => "\u{276b}", // ❪ ❫
    "\u{276c}" => "\u{276d}", // ❬ ❭
    "\u{276e}" => "\u{276f}", // ❮ ❯
    "\u{2770}" => "\u{2771}", // ❰ ❱
    "\u{2772}" => "\u{2773}", // ❲ ❳
    "\u{2774}" => "\u{2775}", // ❴ ❵
    "\u{27c5}" => "\u{27c6}", // ⟅ ⟆
    "\u{27e6}" => "\u{27e7}", // ⟦ ⟧
    "\u{27e8}" => "\u{27e9}", // ⟨ ⟩
    "\u{27ea}" => "\u{27eb}", // ⟪ ⟫
    "\u{27ec}" => "\u{27ed}", // ⟬ ⟭
    "\u{27ee}" => "\u{27ef}", // ⟮ ⟯
    "\u{2983}" => "\u{2984}", // ⦃ ⦄
    "\u{2985}" => "\u{2986}", // ⦅ ⦆
    "\u{2987}" => "\u{2988}", // ⦇ ⦈
    "\u{2989}" => "\u{298a}", // ⦉ ⦊
    "\u{298b}" => "\u{298c}", // ⦋ ⦌
    "\u{298d}" => "\u{2990}", // ⦍ ⦐
    "\u{298f}" => "\u{298e}", // ⦏ ⦎
    "\u{2991}" => "\u{2992}", // ⦑ ⦒
    "\u{2993}" => "\u{2994}", // ⦓ ⦔
    "\u{2995}" => "\u{2996}", // ⦕ ⦖
    "\u{2997}" => "\u{2998}", // ⦗ ⦘
    "\u{29d8}" => "\u{29d9}", // ⧘ ⧙
    "\u{29da}" => "\u{29db}", // ⧚ ⧛
    "\u{29fc}" => "\u{29fd}", // ⧼ ⧽
    "\u{2e22}" => "\u{2e23}", // ⸢ ⸣
    "\u{2e24}" => "\u{2e25}", // ⸤ ⸥
    "\u{2e26}" => "\u{2e27}", // ⸦ ⸧
    "\u{2e28}" => "\u{2e29}", // ⸨ ⸩
    "\u{3008}" => "\u{3009}", // 〈 〉
    "\u{300a}" => "\u{300b}", // 《 》
    "\u{300c}" => "\u{300d}", // 「 」
    "\u{300e}" => "\u{300f}", // 『 』
    "\u{3010}" => "\u{3011}", // 【 】
    "\u{3014}" => "\u{3015}", // 〔 〕
    "\u{3016}" => "\u{3017}", // 〖 〗
    "\u{3018}" => "\u{3019}", // 〘 〙
    "\u{301a}" => "\u{301b}", // 〚 〛
    "\u{301d}" => "\u{301e}", // 〝 〞
    "\u{fd3e}" => "\u{fd3f}", // ﴾ ﴿
    "\u{fe59}" => "\u{fe5a}", // ﹙ ﹚
    "\u{fe5b}" => "\u{fe5c}", // ﹛ ﹜
    "\u{fe5d}" => "\u{fe5e}", // ﹝ ﹞
    "\u{ff08}" => "\u{ff09}", // （ ）
    "\u{ff3b}" => "\u{ff3d}", // ［ ］
    "\u{ff5b}" => "\u{ff5d}", // ｛ ｝
    "\u{ff5f}" => "\u{ff60}", // ｟ ｠
    "\u{ff62}" => "\u{ff63}", // ｢ ｣
    "\u{2308}" => "\u{2309}", // ⌈ ⌉
    "\u{230a}" => "\u{230b}", // ⌊ ⌋
    "\u{230c}" => "\u{230d}", // ⌌ ⌍
    "\u{230e}" => "\u{230f}", // ⌎ ⌏
    "\u{231c}" => "\u{231d}", // ⌜ ⌝
    "\u{231e}" => "\u{231f}", // ⌞ ⌟
    "\u{275b}" => "\u{275c}", // ❛ ❜
    "\u{275d}" => "\u{275e}", // ❝ ❞
    "\u{207d}" => "\u{207e}", // ⁽ ⁾
    "\u{208d}" => "\u{208e}", // ₍ ₎
    "\u{239b}" => "\u{239e}", // ⎛ ⎞
    "\u{239c}" => "\u{239f}", // ⎜ ⎟
    "\u{239d}" => "\u{23a0}", // ⎝ ⎠
    "\u{23a1}" => "\u{23a4}", // ⎡ ⎤
    "\u{23a2}" => "\u{23a5}", // ⎢ ⎥
    "\u{23a3}" => "\u{23a6}", // ⎣ ⎦
    "\u{23a7}" => "\u{23ab}", // ⎧ ⎫
    "\u{23a8}" => "\u{23ac}", // ⎨ ⎬
    "\u{23a9}" => "\u{23ad}", // ⎩ ⎭
    "\u{23b0}" => "\u{23b1}", // ⎰ ⎱
};

/// Over-fences and the under-fence each one pairs with.
pub static TOP_BOTTOM_PAIRS: Map<&str, &str> = phf_map! {
    "\u{23b4}" => "\u{23b5}", // ⎴ ⎵
    "\u{23dc}" => "\u{23dd}", // ⏜ ⏝
    "\u{23de}" => "\u{23df}", // ⏞ ⏟
    "\u{23e0}" => "\u{23e1}", // ⏠ ⏡
    "\u{fe35}" => "\u{fe36}", // ︵ ︶
    "\u{fe37}" => "\u{fe38}", // ︷ ︸
    "\u{fe39}" => "\u{fe3a}", // ︹ ︺
    "\u{fe3b}" => "\u{fe3c}", // ︻ ︼
    "\u{fe3d}" => "\u{fe3e}", // ︽ ︾
    "\u{fe3f}" => "\u{fe40}", // ︿ ﹀
    "\u{fe41}" => "\u{fe42}", // ﹁ ﹂
    "\u{fe43}" => "\u{fe44}", // ﹃ ﹄
    "\u{fe17}" => "\u{fe18}", // ︗ ︘
    "\u{fe47}" => "\u{fe48}", // ﹇ ﹈
};

/// Self-pairing bars.
pub static NEUTRAL_FENCES: Set<&str> = phf_set! {
    "|",
    "\u{a6}", // ¦
    "\u{2223}", // ∣
    "\u{23d0}", // ⏐
    "\u{23b8}", // ⎸
    "\u{23b9}", // ⎹
    "\u{2758}", // ❘
    "\u{ff5c}", // ｜
    "\u{ffe4}", // ￤
    "\u{fe31}", // ︱
    "\u{fe32}", // ︲
};

/// Self-pairing double bars used for norms.
pub static METRIC_FENCES: Set<&str> = phf_set! {
    "\u{2016}", // ‖
    "\u{2225}", // ∥
    "\u{2980}", // ⦀
    "\u{2af4}", // ⫴
};

/// Whether `open` and `close` form a fence pair.
///
/// Neutral and metric fences pair only with themselves. Everything else must
/// be registered as a left/right or top/bottom pair.
#[must_use]
pub fn matches(open: &str, close: &str) -> bool {
    if NEUTRAL_FENCES.contains(open) || METRIC_FENCES.contains(open) {
        return open == close;
    }
    LEFT_RIGHT_PAIRS
        .get(open)
        .or_else(|| TOP_BOTTOM_PAIRS.get(open))
        .is_some_and(|expected| *expected == close)
}

/// Whether two fence roles can belong to one pair.
#[must_use]
pub const fn is_matching_fence_role(open: SemanticRole, close: SemanticRole) -> bool {
    matches!(
        (open, close),
        (SemanticRole::Open, SemanticRole::Close)
            | (SemanticRole::Top, SemanticRole::Bottom)
            | (SemanticRole::Neutral, SemanticRole::Neutral)
            | (SemanticRole::Metric, SemanticRole::Metric)
    )
}

/// An element of a run handed to [`match_fences`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenceItem<T> {
    /// A fence glyph with its classified role.
    Fence {
        /// The glyph.
        glyph: String,
        /// `open`, `close`, `top`, `bottom`, `neutral` or `metric`.
        role: SemanticRole,
        /// Caller data carried through.
        payload: T,
    },
    /// Anything else.
    Other(T),
}

/// Result of [`match_fences`]: the run with matched pairs nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matched<T> {
    /// A matched pair around its interior.
    Pair {
        /// The opening fence.
        open: T,
        /// Everything between the two fences, itself matched.
        interior: Vec<Matched<T>>,
        /// The closing fence.
        close: T,
    },
    /// A fence that found no partner.
    Unmatched(T),
    /// A non-fence element.
    Other(T),
}

struct Frame<T> {
    glyph: String,
    open: T,
    items: Vec<Matched<T>>,
}

struct FenceStack<T> {
    root: Vec<Matched<T>>,
    frames: Vec<Frame<T>>,
    retry_depth: usize,
}

impl<T> FenceStack<T> {
    fn current(&mut self) -> &mut Vec<Matched<T>> {
        match self.frames.last_mut() {
            Some(frame) => &mut frame.items,
            None => &mut self.root,
        }
    }

    /// Index of the frame `close` pairs with, looking at the top entry and
    /// `retry_depth` entries below it.
    fn find_partner(&self, close: &str) -> Option<usize> {
        self.frames
            .iter()
            .enumerate()
            .rev()
            .take(self.retry_depth + 1)
            .find(|(_, frame)| matches(&frame.glyph, close))
            .map(|(idx, _)| idx)
    }

    /// Pops the top frame, leaving its opening fence unmatched and its items
    /// in the enclosing run.
    fn degrade_top(&mut self) {
        if let Some(frame) = self.frames.pop() {
            tracing::debug!(glyph = %frame.glyph, "unmatched opening fence");
            let current = self.current();
            current.push(Matched::Unmatched(frame.open));
            current.extend(frame.items);
        }
    }

    fn close_at(&mut self, idx: usize, close: T) {
        while self.frames.len() > idx + 1 {
            self.degrade_top();
        }
        if let Some(frame) = self.frames.pop() {
            self.current().push(Matched::Pair {
                open: frame.open,
                interior: frame.items,
                close,
            });
        }
    }

    fn open(&mut self, glyph: String, open: T) {
        self.frames.push(Frame {
            glyph,
            open,
            items: Vec::new(),
        });
    }

    fn finish(mut self) -> Vec<Matched<T>> {
        while !self.frames.is_empty() {
            self.degrade_top();
        }
        self.root
    }
}

/// Pairs the fences of a run left to right.
///
/// Opening and top fences are pushed; closing and bottom fences pair with the
/// nearest stack entry within `retry_depth` entries below the top, degrading
/// every entry they skip. A closing fence with no partner becomes
/// [`Matched::Unmatched`] along with the top entry. Neutral and metric fences
/// close a pending identical glyph or otherwise open. Fences left on the stack
/// at the end are unmatched.
pub fn match_fences<T, I>(items: I, retry_depth: usize) -> Vec<Matched<T>>
where
    I: IntoIterator<Item = FenceItem<T>>,
{
    let mut stack = FenceStack {
        root: Vec::new(),
        frames: Vec::new(),
        retry_depth,
    };

    for item in items {
        let (glyph, role, payload) = match item {
            FenceItem::Other(payload) => {
                stack.current().push(Matched::Other(payload));
                continue;
            }
            FenceItem::Fence {
                glyph,
                role,
                payload,
            } => (glyph, role, payload),
        };

        match role {
            SemanticRole::Open | SemanticRole::Top => stack.open(glyph, payload),
            SemanticRole::Close | SemanticRole::Bottom => {
                if let Some(idx) = stack.find_partner(&glyph) {
                    stack.close_at(idx, payload);
                } else {
                    tracing::debug!(glyph = %glyph, "unmatched closing fence");
                    stack.degrade_top();
                    stack.current().push(Matched::Unmatched(payload));
                }
            }
            SemanticRole::Neutral | SemanticRole::Metric => {
                if let Some(idx) = stack.find_partner(&glyph) {
                    stack.close_at(idx, payload);
                } else {
                    stack.open(glyph, payload);
                }
            }
            _ => stack.current().push(Matched::Other(payload)),
        }
    }

    stack.finish()
}
