//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Galaxy Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Edits are picked up live; [galaxy] changes regenerate the point cloud.

[galaxy]
# count = 100000           # 100-1000000, step 100
# size = 0.01              # 0.01-0.1, step 0.01
# radius = 5.0             # 0.01-20, step 0.01
# branches = 3             # 3-20
# spin = 1.0               # -5-5, step 0.001
# randomness = 0.2         # -2-2, step 0.001 (does not affect generation)
# randomness_power = 3.0   # 1-10, step 0.001
# inside_color = "#ff6030"
# outside_color = "#1b3984"

[camera]
# fov_degrees = 75.0       # 10-150
# near = 0.1
# far = 100.0
# position = [3.0, 3.0, 3.0]
# damping = true
# damping_factor = 0.05    # 0.01-1.0

[animation]
# rotation_speed = 0.02    # radians per second

[window]
# title = "Galaxy"
# width = 1280
# height = 800
# max_pixel_ratio = 2.0    # 1.0-4.0
# show_fps = true

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
}
