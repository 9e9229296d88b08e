use super::Command;
use crate::cli::SetArgs;
use crate::error::{Result, WrapErr, error};
use crate::form::{display_value, validate};
use crate::target::Target;
use profile::{Setting, SettingsRecord};

#[derive(Debug, Default, PartialEq)]
struct Applied {
    changed: Vec<Setting>,
    /// Requested, but the profile has no line for them
    skipped: Vec<Setting>,
}

pub struct SetCommand {
    target: Target,
    args: SetArgs,
}

impl SetCommand {
    pub fn new(target: Target, args: SetArgs) -> Self {
        Self { target, args }
    }

    fn requested(&self) -> Vec<(Setting, f64)> {
        [
            (Setting::FieldOfView, self.args.fov),
            (Setting::FullscreenRefreshRate, self.args.fullscreen_refresh_rate),
            (Setting::WindowedRefreshRate, self.args.windowed_refresh_rate),
        ]
        .into_iter()
        .filter_map(|(setting, value)| value.map(|v| (setting, v)))
        .collect()
    }

    /// Validates every requested value before touching `record`.
    fn apply(&self, record: &mut SettingsRecord) -> Result<Applied> {
        let requested = self.requested();
        if requested.is_empty() {
            return Err(error!("Nothing to set, pass at least one of --fov, --fullscreen-refresh-rate, --windowed-refresh-rate"));
        }

        for &(setting, value) in &requested {
            validate(setting, value).map_err(|reason| error!(reason))?;
        }

        let mut applied = Applied::default();
        for (setting, value) in requested {
            if record.get(setting).is_none() {
                tracing::warn!("{} is not present in the profile, the value will not be written", setting);
                applied.skipped.push(setting);
                continue;
            }
            record.set(setting, value);
            applied.changed.push(setting);
        }
        Ok(applied)
    }
}

impl Command for SetCommand {
    fn execute(&self) -> Result<()> {
        let path = self.target.resolve()?;
        let mut record = profile::load(&path).wrap_err("Load profile error")?;

        let applied = self.apply(&mut record)?;
        if !applied.changed.is_empty() {
            profile::save(&path, &record).wrap_err("Save profile error")?;
        }

        for setting in applied.changed {
            println!("{} = {}", setting.label(), display_value(record.get(setting)));
        }
        for setting in applied.skipped {
            println!("{} skipped, {} is not in the profile", setting.label(), setting.key());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn command(args: SetArgs) -> SetCommand {
        let target = Target {
            profile: Some(PathBuf::from("unused")),
            game_dir: None,
            prompt: false,
        };
        SetCommand::new(target, args)
    }

    fn loaded() -> SettingsRecord {
        SettingsRecord {
            field_of_view: Some(90.0),
            fullscreen_refresh_rate: Some(60.0),
            windowed_refresh_rate: Some(60.0),
        }
    }

    #[test]
    fn test_apply_only_given_values() {
        let cmd = command(SetArgs {
            fov: Some(110.0),
            windowed_refresh_rate: Some(144.0),
            ..Default::default()
        });
        let mut record = loaded();

        let applied = cmd.apply(&mut record).unwrap();
        assert_eq!(applied.changed, vec![Setting::FieldOfView, Setting::WindowedRefreshRate]);
        assert!(applied.skipped.is_empty());
        assert_eq!(
            record,
            SettingsRecord {
                field_of_view: Some(110.0),
                fullscreen_refresh_rate: Some(60.0),
                windowed_refresh_rate: Some(144.0),
            }
        );
    }

    #[test]
    fn test_apply_requires_a_value() {
        let mut record = loaded();
        assert!(command(SetArgs::default()).apply(&mut record).is_err());
    }

    #[test]
    fn test_out_of_range_leaves_record_untouched() {
        let cmd = command(SetArgs {
            fov: Some(100.0),
            fullscreen_refresh_rate: Some(1.0),
            ..Default::default()
        });
        let mut record = loaded();

        assert!(cmd.apply(&mut record).is_err());
        assert_eq!(record, loaded());
    }

    #[test]
    fn test_absent_key_is_skipped() {
        let cmd = command(SetArgs {
            fov: Some(100.0),
            windowed_refresh_rate: Some(144.0),
            ..Default::default()
        });
        let mut record = SettingsRecord {
            field_of_view: Some(90.0),
            ..Default::default()
        };

        let applied = cmd.apply(&mut record).unwrap();
        assert_eq!(
            applied,
            Applied {
                changed: vec![Setting::FieldOfView],
                skipped: vec![Setting::WindowedRefreshRate],
            }
        );
        assert_eq!(record.windowed_refresh_rate, None);
    }
}
