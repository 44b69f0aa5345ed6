//! Advisor conversation state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in `RwSignal<ChatState>` context so the conversation survives
//! navigating away from the advisor page and back.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

pub const GREETING: &str = "Hello! I'm your AI Strategy Advisor. I have access to your portfolio data, latest AI predictions, and real-time market sentiment.\n\nHow can I help you today? Try asking about your portfolio strategy, specific stocks, or risk management.";

pub const CLEARED_GREETING: &str = "Hello! I'm your AI Strategy Advisor. How can I help you today?";

pub const UNREACHABLE_REPLY: &str = "Sorry, I couldn't reach the advisor service.";

pub const EMPTY_REPLY: &str = "(no reply)";

pub const SUGGESTIONS: [&str; 5] = [
    "What's the best strategy for my current portfolio?",
    "Should I buy more RELIANCE now?",
    "How can I reduce my portfolio risk?",
    "Which Nifty 50 stocks are bullish today?",
    "Explain the sentiment score for TCS",
];

const OFFLINE_DEFAULT: &str = r"📊 **Portfolio Strategy Analysis**

Based on your current portfolio composition:

**Key Observations:**
• Tech concentration is high at 45.1% — above optimal 35%
• RELIANCE showing strong momentum (+1.24% today)
• WIPRO in bearish territory — watch for stop loss breach

**Recommended Actions:**
1. ✅ HOLD RELIANCE — target ₹3,120 | Stop: ₹2,650
2. ✅ BUY INFOSYS on dips — AI confidence 84%
3. ⚠️ REDUCE WIPRO — consider booking partial profits
4. 🔄 REBALANCE — add healthcare/FMCG exposure

**Risk Assessment:** Moderate (42/100)
Your portfolio beta is 1.12 — slightly aggressive. Consider adding defensive stocks.";

const OFFLINE_RELIANCE: &str = r"🔍 **RELIANCE Analysis**

Current Price: ₹2,847.50 | Target: ₹3,120 | Stop: ₹2,650

**AI Prediction:** STRONG BUY (87% confidence)

**Bullish Factors:**
• LSTM trend score: 82/100 — strong uptrend
• Jio subscriber growth beating estimates
• Retail segment EBITDA margin expansion
• RSI at 62 — not overbought, room to run
• Institutional buying: ₹2,400 Cr net inflow this week

**Verdict:** Add on dips to ₹2,780-2,800 zone. 3-month target ₹3,120.";

const OFFLINE_RISK: &str = r"🛡️ **Risk Reduction Strategy**

Your portfolio risk score is 42/100 (Moderate). Here's how to optimize:

**1. Diversification (Priority: HIGH)**
   → Add Banking: Target 30% from current 22%
   → Add Healthcare: 0% → 15% target
   → Add Pharma: SUNPHARMA, DRREDDY recommended

**2. Reduce Tech Concentration**
   → Current: 45.1% | Target: 30-35%
   → Book partial profits in INFOSYS (+11% since entry)

**3. Set Stop Losses**
   → WIPRO: ₹490 (breach = strong SELL signal)
   → HDFC BANK: ₹1,580 (support zone)

**Post-optimization risk score estimate: 28-32/100 (Low)**";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { messages: vec![ChatMessage::assistant(GREETING)], loading: false }
    }
}

impl ChatState {
    /// Append the user's message. Blank input is ignored and returns `None`.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() || self.loading {
            return None;
        }
        self.messages.push(ChatMessage::user(input));
        self.loading = true;
        Some(input.to_owned())
    }

    /// Append the advisor's reply; `None` reads as an empty reply.
    pub fn finish_reply(&mut self, reply: Option<String>) {
        let text = reply.filter(|r| !r.is_empty()).unwrap_or_else(|| EMPTY_REPLY.to_owned());
        self.messages.push(ChatMessage::assistant(text));
        self.loading = false;
    }

    /// Append the apology and the offline analysis for `query`.
    pub fn finish_offline(&mut self, query: &str) {
        self.messages.push(ChatMessage::assistant(UNREACHABLE_REPLY));
        self.messages.push(ChatMessage::assistant(offline_reply(query)));
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.messages = vec![ChatMessage::assistant(CLEARED_GREETING)];
        self.loading = false;
    }
}

/// Canned analysis picked by keyword when the advisor is unreachable.
pub fn offline_reply(query: &str) -> &'static str {
    let lowered = query.to_lowercase();
    if lowered.contains("reliance") {
        OFFLINE_RELIANCE
    } else if lowered.contains("risk") {
        OFFLINE_RISK
    } else {
        OFFLINE_DEFAULT
    }
}
