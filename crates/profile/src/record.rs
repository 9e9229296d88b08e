use crate::setting::Setting;
use serde::{Deserialize, Serialize};

/// The three display settings read from a profile. A field is `None` when its
/// key does not occur in the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    pub field_of_view: Option<f64>,
    pub fullscreen_refresh_rate: Option<f64>,
    pub windowed_refresh_rate: Option<f64>,
}

impl SettingsRecord {
    pub fn get(&self, setting: Setting) -> Option<f64> {
        match setting {
            Setting::FieldOfView => self.field_of_view,
            Setting::FullscreenRefreshRate => self.fullscreen_refresh_rate,
            Setting::WindowedRefreshRate => self.windowed_refresh_rate,
        }
    }

    pub fn set(&mut self, setting: Setting, value: f64) {
        *self.slot(setting) = Some(value);
    }

    pub fn clear(&mut self, setting: Setting) {
        *self.slot(setting) = None;
    }

    fn slot(&mut self, setting: Setting) -> &mut Option<f64> {
        match setting {
            Setting::FieldOfView => &mut self.field_of_view,
            Setting::FullscreenRefreshRate => &mut self.fullscreen_refresh_rate,
            Setting::WindowedRefreshRate => &mut self.windowed_refresh_rate,
        }
    }

    pub fn is_empty(&self) -> bool {
        Setting::ALL.iter().all(|&s| self.get(s).is_none())
    }

    pub fn is_complete(&self) -> bool {
        Setting::ALL.iter().all(|&s| self.get(s).is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Setting, Option<f64>)> + '_ {
        Setting::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let record = SettingsRecord::default();
        assert!(record.is_empty());
        assert!(!record.is_complete());
    }

    #[test]
    fn test_set_and_clear() {
        let mut record = SettingsRecord::default();
        record.set(Setting::WindowedRefreshRate, 144.0);
        assert_eq!(record.windowed_refresh_rate, Some(144.0));
        assert_eq!(record.get(Setting::FieldOfView), None);

        record.clear(Setting::WindowedRefreshRate);
        assert!(record.is_empty());
    }

    #[test]
    fn test_serializes_absent_fields_as_null() {
        let record = SettingsRecord {
            field_of_view: Some(90.0),
            ..Default::default()
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fieldOfView": 90.0,
                "fullscreenRefreshRate": null,
                "windowedRefreshRate": null,
            })
        );
    }
}
