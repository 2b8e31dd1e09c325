use crate::Touches;
use crate::rules::SoundShift;
use crate::rules::predicates::{NULL_INITIAL, is_labial, set, substitute};

// Vowel mergers

/// `ur` merges into `u`.
pub fn v_as_u() -> SoundShift {
    shift! {
        name: "FR_V_As_U",
        description: "单元音 ur 转为 u。潮阳、普宁、惠来、陆丰等地的口音。",
        examples: ["书", "之", "居", "鱼"],
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "v" {
                set(&mut p.rhyme, "u");
            }
        },
    }
}

/// `er` merges into `o`.
pub fn r_as_o() -> SoundShift {
    shift! {
        name: "FR_R_As_O",
        description: "单元音 er 转为 o。潮汕大部分地区口音。",
        examples: ["坐", "罪", "短", "退"],
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "r" {
                set(&mut p.rhyme, "o");
            }
        },
    }
}

/// `er` merges into `e`.
pub fn r_as_e() -> SoundShift {
    shift! {
        name: "FR_R_As_E",
        description: "单元音 er 转为 e。陆丰口音。",
        examples: ["坐", "罪", "短", "退"],
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "r" {
                set(&mut p.rhyme, "e");
            }
        },
    }
}

pub fn rh_as_oh() -> SoundShift {
    shift! {
        name: "FR_RH_As_OH",
        description: "单元音 erh 转为 oh。潮汕大部分地区口音。",
        examples: ["夺", "绝", "鳕", "雪"],
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "rh" {
                set(&mut p.rhyme, "oh");
            }
        },
    }
}

pub fn rm_as_iam() -> SoundShift {
    shift! {
        name: "FR_RM_As_IAM",
        description: "erm 转为 iam。庄组深摄部分字音。",
        examples: ["森", "参", "簪"],
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "rm" {
                set(&mut p.rhyme, "iam");
            }
        },
    }
}

pub fn eu_as_iu() -> SoundShift {
    shift! {
        name: "FR_EU_As_IU",
        description: "eu 转为 iu。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "eu" {
                set(&mut p.rhyme, "iu");
            }
        },
    }
}

// Nasal-vowel finals

pub fn oinn_as_ainn() -> SoundShift {
    shift! {
        name: "FR_OINN_As_AINN",
        description: "oinn 转为 ainn。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "oinn" {
                set(&mut p.rhyme, "ainn");
            }
        },
    }
}

pub fn uoinn_as_uinn() -> SoundShift {
    shift! {
        name: "FR_UOINN_As_UINN",
        description: "uoinn 转为 uinn。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "uoinn" {
                set(&mut p.rhyme, "uinn");
            }
        },
    }
}

pub fn uoinn_as_uainn() -> SoundShift {
    shift! {
        name: "FR_UOINN_As_UAINN",
        description: "uoinn 转为 uainn。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "uoinn" {
                set(&mut p.rhyme, "uainn");
            }
        },
    }
}

// Diphthongs

/// `oi` after a labial onset becomes `ue`.
pub fn oi_as_ue() -> SoundShift {
    shift! {
        name: "FR_OI_As_UE",
        description: "唇音声母后 oi 转为 ue。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if is_labial(&p.initial) && p.rhyme == "oi" {
                substitute(&mut p.rhyme, "oi", "ue");
            }
        },
    }
}

/// Covers `ou`, `ounn` and `ouh`.
pub fn ou_as_au() -> SoundShift {
    shift! {
        name: "FR_OU_As_AU",
        description: "ou 系韵母转为 au。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme.starts_with("ou") {
                substitute(&mut p.rhyme, "ou", "au");
            }
        },
    }
}

pub fn ue_as_uei() -> SoundShift {
    shift! {
        name: "FR_UE_As_UEI",
        description: "ue、uenn、ueh 转为 uei、ueinn、ueih。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if matches!(p.rhyme.as_str(), "ue" | "uenn" | "ueh") {
                substitute(&mut p.rhyme, "ue", "uei");
            }
        },
    }
}

pub fn vn_as_in() -> SoundShift {
    shift! {
        name: "FR_VN_As_IN",
        description: "urn、urt 转为 in、it。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if matches!(p.rhyme.as_str(), "vn" | "vt") {
                substitute(&mut p.rhyme, "v", "i");
            }
        },
    }
}

pub fn in_as_en() -> SoundShift {
    shift! {
        name: "FR_IN_As_EN",
        description: "in、it 转为 en、et。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if matches!(p.rhyme.as_str(), "in" | "it") {
                substitute(&mut p.rhyme, "i", "e");
            }
        },
    }
}

/// `ueng` loses its medial without an onset and opens to `uang` after one.
pub fn ueng_as_eng() -> SoundShift {
    shift! {
        name: "FR_UENG_As_ENG",
        description: "零声母 ueng 转为 eng，其余转为 uang。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "ueng" {
                if p.initial == NULL_INITIAL {
                    set(&mut p.rhyme, "eng");
                } else {
                    set(&mut p.rhyme, "uang");
                }
            }
        },
    }
}

pub fn uek_as_uak() -> SoundShift {
    shift! {
        name: "FR_UEK_As_UAK",
        description: "uek 转为 uak。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "uek" {
                set(&mut p.rhyme, "uak");
            }
        },
    }
}

pub fn io_as_ie() -> SoundShift {
    shift! {
        name: "FR_IO_As_IE",
        description: "io、ionn、ioh 转为 ie、ienn、ieh。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if matches!(p.rhyme.as_str(), "io" | "ionn" | "ioh") {
                substitute(&mut p.rhyme, "io", "ie");
            }
        },
    }
}

pub fn iau_as_ieu() -> SoundShift {
    shift! {
        name: "FR_IAU_As_IEU",
        description: "iau 系韵母转为 ieu。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme.starts_with("iau") {
                substitute(&mut p.rhyme, "iau", "ieu");
            }
        },
    }
}

/// Only the plain `iau`; `iaunn` and `iauh` are left alone.
pub fn iau_as_iou() -> SoundShift {
    shift! {
        name: "FR_IAU_As_IOU",
        description: "iau 转为 iou。",
        touches: Touches::FINAL,
        fuzz: |p| {
            if p.rhyme == "iau" {
                substitute(&mut p.rhyme, "iau", "iou");
            }
        },
    }
}

// Raised `a` before a front coda

pub fn ian_as_ien() -> SoundShift {
    shift! {
        name: "FR_IAN_As_IEN",
        description: "ian、iat 转为 ien、iet。",
        touches: Touches::FINAL,
        fuzz: |p| {
            let shifted = match p.rhyme.as_str() {
                "ian" => "ien",
                "iat" => "iet",
                _ => return,
            };
            set(&mut p.rhyme, shifted);
        },
    }
}

pub fn uan_as_uen() -> SoundShift {
    shift! {
        name: "FR_UAN_As_UEN",
        description: "uan、uat 转为 uen、uet。",
        touches: Touches::FINAL,
        fuzz: |p| {
            let shifted = match p.rhyme.as_str() {
                "uan" => "uen",
                "uat" => "uet",
                _ => return,
            };
            set(&mut p.rhyme, shifted);
        },
    }
}

pub fn iam_as_iem() -> SoundShift {
    shift! {
        name: "FR_IAM_As_IEM",
        description: "iam、iap 转为 iem、iep。",
        touches: Touches::FINAL,
        fuzz: |p| {
            let shifted = match p.rhyme.as_str() {
                "iam" => "iem",
                "iap" => "iep",
                _ => return,
            };
            set(&mut p.rhyme, shifted);
        },
    }
}

pub fn get() -> Vec<SoundShift> {
    vec![
        v_as_u(),
        r_as_o(),
        r_as_e(),
        rh_as_oh(),
        rm_as_iam(),
        eu_as_iu(),
        oinn_as_ainn(),
        uoinn_as_uinn(),
        uoinn_as_uainn(),
        oi_as_ue(),
        ou_as_au(),
        ue_as_uei(),
        vn_as_in(),
        in_as_en(),
        ueng_as_eng(),
        uek_as_uak(),
        io_as_ie(),
        iau_as_ieu(),
        iau_as_iou(),
        ian_as_ien(),
        uan_as_uen(),
        iam_as_iem(),
    ]
}
