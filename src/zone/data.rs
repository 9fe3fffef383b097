use crate::Result;
use include_dir::{include_dir, Dir};

static DATA_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/data");

pub const BUNDLED_FILE_NAME: &str = "boundaries.geojson";

/// Boundary definitions shipped with the binary
pub fn bundled() -> Result<&'static str> {
    DATA_DIR
        .get_file(BUNDLED_FILE_NAME)
        .ok_or_else(|| format!("Bundled file {BUNDLED_FILE_NAME} is missing"))?
        .contents_utf8()
        .ok_or_else(|| format!("Bundled file {BUNDLED_FILE_NAME} is not valid UTF-8").into())
}

#[cfg(test)]
mod test {
    #[test]
    fn bundled() {
        let data = super::bundled().unwrap();
        assert!(data.contains("FeatureCollection"));
    }
}
