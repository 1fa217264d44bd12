//! The Substitution Table: a fixed, ordered list of literal emoji/symbol
//! sequences and the ASCII text that replaces them.
//!
//! The table is applied pair by pair, in order, over the same evolving
//! string. Keys that end in VARIATION SELECTOR-16 (`U+FE0F`) carry it as part
//! of the key, so the selector is consumed together with its base character.
//!
//! License: MIT OR Apache-2.0

/// Every substitution, in application order.
pub static SUBSTITUTIONS: &[(&str, &str)] = &[
    // Status and pictographs
    ("\u{2705}", "[OK]"),                 // ✅
    ("\u{274C}", "[X]"),                  // ❌
    ("\u{26A0}\u{FE0F}", "[WARNING]"),    // ⚠️
    ("\u{1F3AF}", "[TARGET]"),            // 🎯
    ("\u{1F4CA}", "[TABLE]"),             // 📊
    ("\u{1F527}", "[CONFIG]"),            // 🔧
    ("\u{1F4BB}", "[CODE]"),              // 💻
    ("\u{1F4DD}", "[NOTE]"),              // 📝
    ("\u{1F680}", "[START]"),             // 🚀
    ("\u{1F504}", "[UPDATE]"),            // 🔄
    ("\u{1F4CB}", "[LIST]"),              // 📋
    ("\u{1F50D}", "[SEARCH]"),            // 🔍
    ("\u{1F4A1}", "[INFO]"),              // 💡
    ("\u{1F393}", "[LEARN]"),             // 🎓
    ("\u{1F3D7}\u{FE0F}", "[BUILD]"),     // 🏗️
    ("\u{1F4DA}", "[DOCS]"),              // 📚
    ("\u{1F510}", "[SECURITY]"),          // 🔐
    ("\u{1F4E6}", "[PACKAGE]"),           // 📦
    ("\u{1F310}", "[NETWORK]"),           // 🌐
    ("\u{1F50C}", "[CONNECT]"),           // 🔌
    ("\u{1F4E1}", "[SIGNAL]"),            // 📡
    ("\u{23F3}", "[PENDING]"),            // ⏳
    ("\u{1F6A8}", "[ALERT]"),             // 🚨
    ("\u{1F389}", "[SUCCESS]"),           // 🎉
    ("\u{1F914}", "[QUESTION]"),          // 🤔
    ("\u{1F4BE}", "[STORAGE]"),           // 💾
    ("\u{1F5C2}\u{FE0F}", "[FILE]"),      // 🗂️
    ("\u{1F4D0}", "[DESIGN]"),            // 📐
    ("\u{1F511}", "[KEY]"),               // 🔑
    ("\u{1F6E0}\u{FE0F}", "[TOOL]"),      // 🛠️
    ("\u{1F4D6}", "[REFERENCE]"),         // 📖
    ("\u{1F3F7}\u{FE0F}", "[TAG]"),       // 🏷️
    ("\u{1F512}", "[SECURE]"),            // 🔒
    ("\u{1F433}", "[DOCKER]"),            // 🐳
    ("\u{23F0}", "[TIME]"),               // ⏰
    ("\u{1F3AC}", "[ACTION]"),            // 🎬
    // Decorative, dropped entirely
    ("\u{1F44F}", ""),                    // 👏
    ("\u{1F44D}", ""),                    // 👍
    ("\u{1F64F}", ""),                    // 🙏
    ("\u{1F604}", ""),                    // 😄
    ("\u{1F60A}", ""),                    // 😊
    ("\u{1F92F}", ""),                    // 🤯
    ("\u{1F3AD}", "[EXAMPLE]"),           // 🎭
    ("\u{1F525}", "[HOT]"),               // 🔥
    ("\u{2728}", ""),                     // ✨
    ("\u{1F9EE}", "[CALC]"),              // 🧮
    ("\u{1F9EA}", "[TEST]"),              // 🧪
    ("\u{1F6A6}", "[CONTROL]"),           // 🚦
    ("\u{1F4C5}", "[DATE]"),              // 📅
    ("\u{1F3C1}", "[FINISH]"),            // 🏁
    ("\u{1F4A5}", "[ERROR]"),             // 💥
    ("\u{1F535}", "[SERVER]"),            // 🔵
    ("\u{1F534}", "[CLIENT]"),            // 🔴
    // Box drawing
    ("\u{2501}", "-"),                    // ━
    ("\u{250C}", "+"),                    // ┌
    ("\u{2510}", "+"),                    // ┐
    ("\u{2514}", "+"),                    // └
    ("\u{2518}", "+"),                    // ┘
    ("\u{251C}", "+"),                    // ├
    ("\u{2524}", "+"),                    // ┤
    ("\u{252C}", "+"),                    // ┬
    ("\u{2534}", "+"),                    // ┴
    ("\u{253C}", "+"),                    // ┼
    ("\u{2502}", "|"),                    // │
    ("\u{2500}", "-"),                    // ─
    // Triangles
    ("\u{25BC}", "v"),                    // ▼
    ("\u{25BA}", ">"),                    // ►
    ("\u{25C4}", "<"),                    // ◄
    ("\u{25B2}", "^"),                    // ▲
    // Arrows
    ("\u{21C4}", "<->"),                  // ⇄
    ("\u{2192}", "->"),                   // →
    ("\u{2190}", "<-"),                   // ←
    ("\u{2193}", "|"),                    // ↓
    ("\u{2191}", "|"),                    // ↑
    ("\u{21D2}", "=>"),                   // ⇒
];

/// Returns the full table in application order.
pub fn entries() -> &'static [(&'static str, &'static str)] {
    SUBSTITUTIONS
}

/// Looks up the replacement for an exact key.
pub fn lookup(key: &str) -> Option<&'static str> {
    SUBSTITUTIONS
        .iter()
        .find(|(pattern, _)| *pattern == key)
        .map(|(_, replacement)| *replacement)
}
