use std::fmt;

/// One of the display settings this crate knows how to patch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Setting {
    FieldOfView,
    FullscreenRefreshRate,
    WindowedRefreshRate,
}

pub struct SettingDef {
    pub setting: Setting,
    /// Literal line prefix in the profile
    pub key: &'static str,
    pub label: &'static str,
}

pub static SETTING_DEFINITIONS: &[SettingDef] = &[
    SettingDef {
        setting: Setting::FieldOfView,
        key: "GstRender.FieldOfView",
        label: "Field of View",
    },
    SettingDef {
        setting: Setting::FullscreenRefreshRate,
        key: "GstRender.FullscreenRefreshRate",
        label: "Fullscreen Refresh Rate",
    },
    SettingDef {
        setting: Setting::WindowedRefreshRate,
        key: "GstRender.WindowedRefreshRate",
        label: "Windowed Refresh Rate",
    },
];

impl Setting {
    pub const ALL: [Setting; 3] = [
        Setting::FieldOfView,
        Setting::FullscreenRefreshRate,
        Setting::WindowedRefreshRate,
    ];

    // SETTING_DEFINITIONS is ordered by discriminant
    fn def(self) -> &'static SettingDef {
        &SETTING_DEFINITIONS[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.def().key
    }

    pub fn label(self) -> &'static str {
        self.def().label
    }

    /// The setting whose key is a prefix of `line`. Keys never prefix one
    /// another, so at most one matches.
    pub fn match_line(line: &[u8]) -> Option<Setting> {
        SETTING_DEFINITIONS
            .iter()
            .find(|def| line.starts_with(def.key.as_bytes()))
            .map(|def| def.setting)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
