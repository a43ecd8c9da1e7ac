//! User-facing texts and the main reply keyboard.

use dbot_core::ReplyKeyboard;
use storage::VocabEntry;

// ---------- Button labels (matched verbatim) ----------

pub const BTN_ADD: &str = "➕ Add";
pub const BTN_LIST: &str = "📋 List";
pub const BTN_QUIZ: &str = "🧠 Quiz";
pub const BTN_STOP: &str = "⛔ Stop";

// ---------- Fixed replies ----------

pub const WELCOME: &str = "안녕하세요! Korean Vocabulary Bot입니다!\n\n\
    Use the buttons below to choose a function.\n\
    You can stay in a mode until you press another button.\n\n\
    Buttons: Add, List, Quiz, Stop";

pub const ADD_MODE_ON: &str = "➕ Add mode activated.\n\
    Send words as: korean english [optional example sentence]\n\
    Example: 사랑 love I love you\n\n\
    Press '⛔ Stop' to exit.";

pub const ADD_USAGE_COMMAND: &str = "❌ Usage: /add 사랑 love [optional example sentence]";
pub const ADD_USAGE_TEXT: &str = "❌ Usage: korean english [optional example sentence]";

pub const QUIZ_MODE_ON: &str =
    "🧠 Quiz mode activated. Send your answers or press '⛔ Stop' to exit.";
pub const NO_WORDS_YET: &str = "No words yet! Use Add to add some first.";
pub const NO_ACTIVE_QUESTION: &str = "No active question. Press 'Quiz' to start.";
pub const CORRECT: &str = "✅ Correct!";

pub const STOPPED: &str = "⛔ Stopped. Returning to menu.";
pub const STOPPED_WITH_HELP: &str = "Stopped. Returning to menu...\n\n\
    Commands:\n\
    /add 사랑 love I love you — add a word\n\
    /list — show recent words\n\
    /quiz — start a quiz\n\
    /stop — stop and return to menu";

pub const IDLE_PROMPT: &str = "Press a button to start (Add, List, Quiz, Stop).";

// ---------- Formatted replies ----------

pub fn added(korean: &str, english: &str) -> String {
    format!("✅ Added: {} = {}", korean, english)
}

pub fn wrong(expected: &str) -> String {
    format!("❌ Wrong. Correct answer: {}", expected)
}

fn push_entry(out: &mut String, entry: &VocabEntry) {
    out.push_str(&format!("• {} → {}", entry.korean, entry.english));
    if entry.has_example() {
        out.push_str(&format!("\n   📘 {}", entry.example));
    }
    out.push('\n');
}

/// The List reply: latest entries, then a random sample.
pub fn word_list(
    recent: &[VocabEntry],
    random: &[VocabEntry],
    recent_limit: u32,
    random_limit: u32,
) -> String {
    let mut out = format!("🆕 Latest {} Words:\n \n", recent_limit);
    for entry in recent {
        push_entry(&mut out, entry);
    }
    out.push_str(&format!("\n🎲 Random {} Words:\n \n", random_limit));
    for entry in random {
        push_entry(&mut out, entry);
    }
    out
}

/// Two rows: Add/List and Quiz/Stop.
pub fn main_keyboard() -> ReplyKeyboard {
    ReplyKeyboard::new([[BTN_ADD, BTN_LIST], [BTN_QUIZ, BTN_STOP]]).resized()
}
