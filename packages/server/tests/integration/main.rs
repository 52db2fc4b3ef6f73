mod gallery;
mod pages;
