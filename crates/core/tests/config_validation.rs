use hexmap::{GridConfig, HexLayout};
use validator::ValidationErrors;

#[test]
fn test_grid_config_validation() {
    let config = GridConfig {
        grid_scale: -2.0, // invalid
    };

    // This is a bit of a lazy check but it works well enough
    let err = HexLayout::new(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    assert_eq!(
        error_fields,
        vec!["grid_scale"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_grid_config_valid() {
    let layout = HexLayout::new(GridConfig { grid_scale: 4.0 }).unwrap();
    assert_eq!(layout.grid_scale(), 4.0);
    assert_eq!(layout.config(), &GridConfig { grid_scale: 4.0 });
}
