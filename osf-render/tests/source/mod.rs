mod includes;
mod tooling;
