//! Profile views produced by node clicks, and the sinks that display them

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use crate::data::Attributes;

/// Human-readable profile of a node: its label and auxiliary attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub title: String,
    pub attributes: Attributes,
}

impl ProfileView {
    pub fn new(title: String, attributes: Attributes) -> Self {
        Self { title, attributes }
    }

    /// Render a standalone HTML page
    pub fn to_html(&self) -> String {
        let title = escape_html(&self.title);
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(&format!("  <title>{}'s Profile</title>\n", title));
        html.push_str("  <style>\n");
        html.push_str("    body { font-family: Arial, sans-serif; margin: 20px; padding: 20px; border: 1px solid #ccc; }\n");
        html.push_str("  </style>\n</head>\n<body>\n");
        html.push_str(&format!("  <h1>{}</h1>\n", title));
        html.push_str("  <h2>Professional Interests</h2>\n  <ul>\n");
        for (name, value) in &self.attributes {
            html.push_str(&format!(
                "    <li>{}: {}</li>\n",
                escape_html(name),
                escape_html(value)
            ));
        }
        html.push_str("  </ul>\n</body>\n</html>\n");

        html
    }
}

/// Presentation surface that receives profile views
pub trait ProfileSink {
    fn present(&mut self, view: ProfileView);
}

/// Keeps every presented profile in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub views: Vec<ProfileView>,
}

impl ProfileSink for CollectingSink {
    fn present(&mut self, view: ProfileView) {
        self.views.push(view);
    }
}

/// Writes each profile as its own HTML page into a directory
#[derive(Debug)]
pub struct HtmlFileSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl HtmlFileSink {
    /// Create the sink, making sure the directory exists
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    /// Pages written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write_page(&self, view: &ProfileView) -> Result<PathBuf> {
        let path = self.dir.join(format!("profile_{}.html", self.written.len() + 1));
        let mut file = File::create(&path)?;
        file.write_all(view.to_html().as_bytes())?;
        Ok(path)
    }
}

impl ProfileSink for HtmlFileSink {
    fn present(&mut self, view: ProfileView) {
        match self.write_page(&view) {
            Ok(path) => {
                log::info!("Profile for {} written to {}", view.title, path.display());
                self.written.push(path);
            }
            Err(err) => log::warn!("Failed to write profile for {}: {:#}", view.title, err),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
