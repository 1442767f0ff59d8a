//! Fixed lines and menu prompts.

use crate::core::Variant;
use crate::progression::Ending;

pub const PROMPT_ACTION: &str = "What will you do?";
pub const PROMPT_ACTION_DUEL: &str = "What do you do?";
pub const PROMPT_ITEM: &str = "Use an item?";
pub const PROMPT_SPELL: &str = "Cast a spell?";
pub const PROMPT_MANUAL: &str = "What would you like to read about?";
pub const PROMPT_DOORS: &str = "Enter the door that piques your interest.";
pub const PROMPT_SINGLE_DOOR: &str = "Enter when you are ready.";
pub const PROMPT_SHOP: &str = "What'cha want? I don't have all day.";

pub const INTRO_OPTIONS: [&str; 3] = ["START", "MANUAL", "QUIT"];
pub const MANUAL_TOPICS: [&str; 5] = ["PREMISE", "SPELLS", "ITEMS", "PERKS", "TIPS"];

pub fn intro_prompt(variant: Variant) -> &'static str {
    match variant {
        Variant::Idols => "... Welcome.",
        _ => "Welcome!",
    }
}

pub const START: &str = "Prepare yourself...";
pub const QUIT: &str = "Farewell.";

/// The single-page manual for the idols.
pub const IDOLS_MANUAL: &[&str] = &[
    "Four idols stand before you. You must do battle with each of them in the order of your choosing.",
    "Once you enter a room, you cannot exit it until either a winner is decided, or you forfeit.",
    "Upon defeating an idol, you will receive their blessing. Each blessing has a unique effect on your competence.",
    "However, if you lose to any of them, you fail.",
    "In battle, you have multiple options:",
    "\"FIGHT\" is your attack prompt. You will attack your enemy and they will attack back.",
    "\"EXAMINE\" allows you to look up a brief entry about your opponent's stats without losing a turn.",
    "\"INVENTORY\" will open your collection of items. You start out with four medicines that heal 50 HP each. Drinking one uses a turn.",
    "\"FORFEIT\" lets you give up fighting and ends the challenge. You will lose all progress by doing so.",
    "May fortune smile upon you.",
];

/// A page of the vices manual, by index into [`MANUAL_TOPICS`].
pub fn manual_page(topic: usize) -> &'static [&'static str] {
    match topic {
        0 => &[
            "This game continues two earlier installments, keeping the turn-based system and building on it.",
            "You will battle through several rooms, each with its own boss, known as an \"idol\".",
            "There are seven unique idols to battle this time around, themed around the seven deadly sins.",
        ],
        1 => &[
            "Spells give you more options in battle.",
            "There are three spells in total:",
            "ZAP: An electric spell that immediately deals around 100 points of damage.",
            "IGNITE: A fire spell that deals about 30 damage each turn for 4 turns.",
            "CONGEAL: An ice spell that prevents the enemy from moving for 3 turns.",
            "Each spell has its own mana cost.",
        ],
        2 => &[
            "Items return from the previous installment and are expanded upon.",
            "MEDICINE: A basic item that restores 50 life points.",
            "ELIXIR: Restores your mana, allowing more spells to be used.",
            "NECTAR: Fully restores your life.",
            "You can hold up to 5 items at a time.",
        ],
        3 => &[
            "Perks are a pair of rather expensive upgrades that can turn the tables in your favour.",
            "ENERGISER: Your mana rises by 1 at the end of each turn.",
            "HEARTSTONE: Doubles your max life. Your health is not restored, however.",
            "It is suggested to purchase both as soon as possible.",
        ],
        4 => &[
            "The more rooms you clear, the more gold you will receive. Clearing all seven rooms will get you a special prize.",
            "Gold is good to have, but spend it while you can. The idol of the yellow room is a notorious pickpocket.",
            "If you wish to battle all seven idols, enter the doors with lower numbers and you will achieve your goal.",
        ],
        _ => &[],
    }
}

pub fn door_count_line(open: usize) -> &'static str {
    match open {
        0 | 1 => "A single door stands before you.",
        2 => "A pair of doors stands before you.",
        _ => "Several doors stand before you.",
    }
}

pub const IDOLS_LOBBY: &str = "Four doors stand in your path.";

pub const HIDDEN_DOOR: &[&str] = &["...", "A hidden door makes itself known to you."];

pub const NECTAR_GIFT: &[&str] = &[
    "How are you managing?",
    "Since you defeated three idols thus far, it would only be fair to give you a small boost.",
    "This item is Nectar, the beverage of the gods. One bottle of this sacred fluid will heal you entirely.",
    "Use it wisely...",
];

pub const FINAL_IDOL: &[&str] = &[
    "...",
    "Incredible.",
    "You defeated the four idols with minimal effort.",
    "However... there is, in fact, one more.",
    "This idol is far stronger than the others.",
    "Prepare yourself, now...",
];

pub const DUEL_DEFEAT: &[&str] = &["May we meet again on the other side!"];

pub fn epilogue(ending: Ending) -> &'static [&'static str] {
    match ending {
        Ending::DuelVictory => &[
            "...!?",
            "I... I died?",
            "I guess... they were right.",
            "All happiness is temporary.",
            "And before I depart, I want to say something.",
            "Enjoy life as it's thrown at you.",
            "Leave your mark on this world...",
            "...because now's your only time to shine...",
            "...",
            "You gained 666,666,666 EXP for winning.",
            "But there's no EXP implemented, so it's useless!",
            "Play again sometime!",
        ],
        Ending::IdolsVictory => &[
            "So, it appears that you have defeated even the god of the idols...",
            "I applaud you. You have survived a hellion of RNG that not many would tolerate.",
            "I thank you, as well. I hope that you found this challenging and engaging.",
            "Thank you for playing!",
        ],
        Ending::VicesEnding => &[
            "Congrats. You defeated the worst of the seven vices.",
            "Do you think that's worthy of applause?",
            "It would be, if there weren't unfinished business.",
            "Here's a hint: The first six doors are shown in pairs.",
            "Remember which is which, then defeat the vice from each door of a pair before advancing to the next.",
            "Thereafter, you'll see the truth.",
            "Best wishes to you.",
        ],
        Ending::TrueEnding => &[
            "Wow.",
            "You actually defeated the end boss.",
            "Congratulations on your victory; you put up with another RNG hell.",
            "This challenge was meant to be more skill based than before, so I hope your victory feels deserved.",
            "Thank you for playing!",
            "Please, play again whenever you like.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_manual_topic_has_a_page() {
        for topic in 0..MANUAL_TOPICS.len() {
            assert!(!manual_page(topic).is_empty());
        }
        assert!(manual_page(MANUAL_TOPICS.len()).is_empty());
    }

    #[test]
    fn test_door_count_lines() {
        assert!(door_count_line(1).contains("single"));
        assert!(door_count_line(2).contains("pair"));
        assert!(door_count_line(3).contains("Several"));
    }
}
