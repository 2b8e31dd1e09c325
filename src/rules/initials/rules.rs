use crate::Touches;
use crate::rules::SoundShift;
use crate::rules::predicates::{NULL_INITIAL, has_n_or_ng_coda, set};

// n/l confusion

/// `n` before an `-m` final is heard as `l`.
pub fn n_as_l_for_m_ending() -> SoundShift {
    shift! {
        name: "FR_N_As_L_ForMEnding",
        description: "-m 韵尾前 n 声母转为 l。",
        touches: Touches::INITIAL,
        fuzz: |p| {
            if p.rhyme.ends_with('m') && p.initial == "n" {
                set(&mut p.initial, "l");
            }
        },
    }
}

/// `n` before an `-n`/`-ng` final is heard as `l`.
pub fn n_as_l_for_n_or_ng_ending() -> SoundShift {
    shift! {
        name: "FR_N_As_L_ForNOrNGEnding",
        description: "-n、-ng 韵尾前 n 声母转为 l。",
        touches: Touches::INITIAL,
        fuzz: |p| {
            if p.initial == "n" && has_n_or_ng_coda(&p.rhyme) {
                set(&mut p.initial, "l");
            }
        },
    }
}

pub fn l_as_n_for_m_ending() -> SoundShift {
    shift! {
        name: "FR_L_As_N_ForMEnding",
        description: "-m 韵尾前 l 声母转为 n。",
        touches: Touches::INITIAL,
        fuzz: |p| {
            if p.rhyme.ends_with('m') && p.initial == "l" {
                set(&mut p.initial, "n");
            }
        },
    }
}

// m/b alternation before rounded nasal finals

pub fn mu_as_bu_for_nasal_ending() -> SoundShift {
    shift! {
        name: "FR_MU_As_BU_ForNasalEnding",
        description: "u 介音且带 -n、-ng 韵尾时 m 声母转为 b。",
        touches: Touches::INITIAL,
        fuzz: |p| {
            if p.initial == "m" && p.rhyme.starts_with('u') && has_n_or_ng_coda(&p.rhyme) {
                set(&mut p.initial, "b");
            }
        },
    }
}

pub fn bu_as_mu_for_nasal_ending() -> SoundShift {
    shift! {
        name: "FR_BU_As_MU_ForNasalEnding",
        description: "u 介音且带 -n、-ng 韵尾时 b 声母转为 m。",
        touches: Touches::INITIAL,
        fuzz: |p| {
            if p.initial == "b" && p.rhyme.starts_with('u') && has_n_or_ng_coda(&p.rhyme) {
                set(&mut p.initial, "m");
            }
        },
    }
}

/// Labials and `h` before `u` turn labiodental: `h` to `f`, `p`/`ph` gain an
/// `f`, `m`/`b` gain a `v`.
pub fn labiodentalized() -> SoundShift {
    shift! {
        name: "FR_Labiodentalized",
        description: "u 开头韵母前的唇音及 h 声母唇齿化。",
        touches: Touches::INITIAL,
        fuzz: |p| {
            if !p.rhyme.starts_with('u') {
                return;
            }
            let labiodental = match p.initial.as_str() {
                "h" => "f".to_string(),
                "p" | "ph" => format!("{}f", p.initial),
                "m" | "b" => format!("{}v", p.initial),
                _ => return,
            };
            p.initial = labiodental;
        },
    }
}

/// `ngu` loses its onset.
pub fn ngu_as_u() -> SoundShift {
    shift! {
        name: "FR_NGU_As_U",
        description: "ngu 转为零声母 u。",
        touches: Touches::INITIAL,
        fuzz: |p| {
            if p.initial == "ng" && p.rhyme == "u" {
                set(&mut p.initial, NULL_INITIAL);
            }
        },
    }
}

/// Strip the glottal marker `'` from both fields.
pub fn remove_apostrophe() -> SoundShift {
    shift! {
        name: "FR_RemoveApostrophe",
        description: "去除声母与韵母中的 ' 标记。",
        touches: Touches::INITIAL.union(Touches::FINAL),
        fuzz: |p| {
            p.initial.retain(|c| c != '\'');
            p.rhyme.retain(|c| c != '\'');
        },
    }
}

pub fn get() -> Vec<SoundShift> {
    vec![
        n_as_l_for_m_ending(),
        n_as_l_for_n_or_ng_ending(),
        l_as_n_for_m_ending(),
        mu_as_bu_for_nasal_ending(),
        bu_as_mu_for_nasal_ending(),
        labiodentalized(),
        ngu_as_u(),
        remove_apostrophe(),
    ]
}
