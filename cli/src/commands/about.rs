use crate::terminal::print;

const DESCRIPTION: [&str; 4] = [
    "Transforms coordinates between WGS 84 and the two Ghana grids.",
    "Enter the coordinates, select the desired transformation and",
    "transform to see the result. Results can be saved to a text",
    "file from the form or with `convert --output`.",
];

pub fn about() {
    print::aligned_line("Tool", "ghcoord");
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("Projections", "proj4rs");
    print::fat_separator();
    for line in DESCRIPTION {
        print::centerln(line);
    }
}
