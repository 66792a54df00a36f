mod launcher_tests;
mod rewrite_tests;
