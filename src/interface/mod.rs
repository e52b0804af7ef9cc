pub mod output;
pub mod prompts;
pub mod render;

pub use output::{blend_json, out_of_band, write_recipe_csv};
pub use prompts::{
    collect_blend_parameters, prompt_number, prompt_percent, prompt_yes_no, BlendParameters,
};
pub use render::{display_blend, display_ingredient_list};
