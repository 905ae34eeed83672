#[cfg(test)]
mod tests {

    use crate::plotting::plot::heatmap;
    use crate::types::*;

    #[test]
    fn test_heatmap() -> Result<(), Box<dyn std::error::Error>> {
        let get_data = |index: Index2| {
            return ((index.x as Scalar) / 15.0).sin().abs()
                * ((index.y as Scalar) / 10.0).cos().abs();
        };

        let file = std::env::temp_dir().join("rsheat-test-heatmap.png");

        heatmap(
            dim!(200, 200),
            dim!(40, 40),
            get_data,
            file.to_string_lossy().into_owned(),
            "",
        )?;

        assert!(file.exists());

        return Ok(());
    }
}
