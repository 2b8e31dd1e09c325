use crate::Touches;
use crate::rules::SoundShift;
use crate::rules::predicates::{NULL_INITIAL, has_n_coda, is_labial, set, substitute};

/// Front codas move back: `-n` to `-ng`, `-t` to `-k`.
pub fn n_as_ng() -> SoundShift {
    shift! {
        name: "FR_N_As_NG",
        description: "前鼻音韵尾 -n、-t 转为 -ng、-k。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if has_n_coda(&p.rhyme) {
                substitute(&mut p.rhyme, "n", "ng");
            } else if p.rhyme.ends_with('t') {
                substitute(&mut p.rhyme, "t", "k");
            }
        },
    }
}

/// Labial codas move back: `-m` to `-ng`, `-p` to `-k`. Syllabic `m` becomes `ng`.
pub fn m_as_ng() -> SoundShift {
    shift! {
        name: "FR_M_As_NG",
        description: "双唇韵尾 -m、-p 转为 -ng、-k。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme.ends_with('m') {
                substitute(&mut p.rhyme, "m", "ng");
            } else if p.rhyme.ends_with('p') {
                substitute(&mut p.rhyme, "p", "k");
            }
        },
    }
}

pub fn eng_as_en() -> SoundShift {
    shift! {
        name: "FR_ENG_As_EN",
        description: "eng、ek 转为 en、et。",
        touches: Touches::FINAL,
        fuzz: |p| {
            let shifted = match p.rhyme.as_str() {
                "eng" => "en",
                "ek" => "et",
                _ => return,
            };
            set(&mut p.rhyme, shifted);
        },
    }
}

/// Syllabic `ng` after a labial gains a `u` nucleus.
pub fn ng_as_ung() -> SoundShift {
    shift! {
        name: "FR_NG_As_UNG",
        description: "唇音声母后的声化韵 ng 转为 ung。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if is_labial(&p.initial) && p.rhyme == "ng" {
                set(&mut p.rhyme, "ung");
            }
        },
    }
}

/// Syllabic `ng` gains a `ur` nucleus, except after `h` or without onset.
pub fn ng_as_vng() -> SoundShift {
    shift! {
        name: "FR_NG_As_VNG",
        description: "声化韵 ng 转为 urng（h 声母及零声母除外）。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "ng" && p.initial != "h" && p.initial != NULL_INITIAL {
                set(&mut p.rhyme, "vng");
            }
        },
    }
}

/// `iong`/`iok` lose the medial after dental and sibilant onsets.
///
/// `th` only takes part for `iong`.
pub fn iong_as_ong() -> SoundShift {
    shift! {
        name: "FR_IONG_As_ONG",
        description: "舌尖声母后 iong、iok 转为 ong、ok。",
        touches: Touches::FINAL,
        fuzz: |p| {
            const IONG_INITIALS: &[&str] = &["t", "th", "n", "l", "ts", "tsh", "s", "j"];
            const IOK_INITIALS: &[&str] = &["t", "n", "l", "ts", "tsh", "s", "j"];

            let initial = p.initial.as_str();
            if IONG_INITIALS.contains(&initial) && p.rhyme == "iong" {
                set(&mut p.rhyme, "ong");
            } else if IOK_INITIALS.contains(&initial) && p.rhyme == "iok" {
                set(&mut p.rhyme, "ok");
            }
        },
    }
}

pub fn get() -> Vec<SoundShift> {
    vec![n_as_ng(), m_as_ng(), eng_as_en(), ng_as_ung(), ng_as_vng(), iong_as_ong()]
}
