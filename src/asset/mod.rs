//! Images
//!
//! ```text
//! assets/
//! ├── Background.png                  # stretched to the virtual frame
//! ├── nisa-nur-celik-astronaut.gif    # player, black is transparent
//! └── tiles/
//!     ├── 1.png                       # drawn for cell code '1'
//!     └── ...
//! ```

mod asset;
mod library;

pub use library::GameAssets;
