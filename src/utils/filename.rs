use std::path::{Path, PathBuf};

/// Output file for one exporter window: `{city}_temps_{days}_days.csv`
pub fn temperature_export_filename(city: &str, days: u32) -> String {
    format!("{}_temps_{}_days.csv", city, days)
}

pub fn temperature_export_path(output_dir: &Path, city: &str, days: u32) -> PathBuf {
    output_dir.join(temperature_export_filename(city, days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::window::doubling_window_sizes;

    #[test]
    fn test_temperature_export_filename() {
        let names: Vec<String> = doubling_window_sizes()
            .map(|days| temperature_export_filename("Marseille", days))
            .collect();

        assert_eq!(names[0], "Marseille_temps_1024_days.csv");
        assert_eq!(names[5], "Marseille_temps_32768_days.csv");
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_city_name_kept_verbatim() {
        assert_eq!(
            temperature_export_filename("new york", 2048),
            "new york_temps_2048_days.csv"
        );
    }

    #[test]
    fn test_temperature_export_path() {
        let path = temperature_export_path(Path::new("output"), "Lyon", 4096);
        assert_eq!(path, PathBuf::from("output/Lyon_temps_4096_days.csv"));
    }
}
