//! Demo runner: drives each pattern and writes its transcript to a sink.

use std::io::Write;

use tracing::{debug, info, instrument};

use crate::application::error_ext::IoResultExt;
use crate::application::{ApplicationResult, Pattern};
use crate::config::Settings;
use crate::domain::catalog::adapter::{Adaptee, Adapter, Target};
use crate::domain::catalog::bridge::{RemoteControl, Tv, TvRemoteControl};
use crate::domain::catalog::builder::{ComputerBuilder, Director, GamingComputerBuilder};
use crate::domain::catalog::copy::TextDocument;
use crate::domain::catalog::decorator::{BorderDecorator, TextView, VisualComponent};
use crate::domain::catalog::facade::Facade;
use crate::domain::catalog::proxy::{Proxy, Subject};
use crate::domain::{GlyphFactory, NodeId, Tree};

/// Runs pattern demonstrations with the configured parameters.
#[derive(Debug, Clone, Default)]
pub struct DemoService {
    settings: Settings,
}

impl DemoService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run one demo and write its transcript to `sink`.
    #[instrument(level = "debug", skip(self, sink))]
    pub fn run(&self, pattern: Pattern, sink: &mut impl Write) -> ApplicationResult<()> {
        let lines = self.transcript(pattern)?;
        debug!(lines = lines.len(), "demo finished");
        write_lines(sink, &lines)
    }

    /// Run every demo in catalog order, each under a `== name ==` header.
    #[instrument(level = "debug", skip(self, sink))]
    pub fn run_all(&self, sink: &mut impl Write) -> ApplicationResult<()> {
        for (i, pattern) in Pattern::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(sink).with_context("write transcript")?;
            }
            writeln!(sink, "== {pattern} ==").with_context("write transcript")?;
            self.run(pattern, sink)?;
        }
        info!(count = Pattern::ALL.len(), "all demos finished");
        Ok(())
    }

    /// Lines a demo produces, without writing them anywhere.
    pub fn transcript(&self, pattern: Pattern) -> ApplicationResult<Vec<String>> {
        let lines = match pattern {
            Pattern::Builder => builder_demo(),
            Pattern::CopyConstructor => copy_demo(),
            Pattern::Adapter => Adapter::new(Adaptee).request(),
            Pattern::Bridge => bridge_demo(),
            Pattern::Composite => self.composite_lines()?,
            Pattern::Decorator => BorderDecorator::new(TextView).draw(),
            Pattern::Facade => Facade::new().operation(),
            Pattern::Flyweight => {
                let fw = &self.settings.flyweight;
                self.glyph_lines(&fw.document, fw.point_size)
            }
            Pattern::Proxy => vec![Proxy::new().request()],
        };
        Ok(lines)
    }

    /// The reference file-system tree: `Root` holding two files and a
    /// subdirectory with one more file.
    pub fn composite_tree(&self) -> ApplicationResult<(Tree, NodeId)> {
        let mut tree = Tree::new();
        let root = tree.container("Root");
        let file1 = tree.leaf("File1.txt");
        let file2 = tree.leaf("File2.txt");
        tree.add(root, file1)?;
        tree.add(root, file2)?;

        let sub_dir = tree.container("SubDirectory");
        let file3 = tree.leaf("File3.txt");
        tree.add(sub_dir, file3)?;
        tree.add(root, sub_dir)?;

        Ok((tree, root))
    }

    fn composite_lines(&self) -> ApplicationResult<Vec<String>> {
        let (tree, root) = self.composite_tree()?;
        let composite = &self.settings.composite;
        Ok(tree.display_with(root, composite.start_depth, &composite.style())?)
    }

    /// Render `document` through a fresh glyph factory, one line per character.
    ///
    /// The point size starts at `point_size` and grows by one per character.
    #[instrument(level = "debug", skip(self, sink))]
    pub fn glyphs(
        &self,
        document: &str,
        point_size: u32,
        sink: &mut impl Write,
    ) -> ApplicationResult<()> {
        write_lines(sink, &self.glyph_lines(document, point_size))
    }

    fn glyph_lines(&self, document: &str, point_size: u32) -> Vec<String> {
        let fw = &self.settings.flyweight;
        let mut factory = GlyphFactory::with_dimensions(fw.width, fw.height);
        let lines: Vec<String> = document
            .chars()
            .enumerate()
            .map(|(offset, symbol)| {
                let size = u32::try_from(offset)
                    .map_or(u32::MAX, |o| point_size.saturating_add(o));
                factory.get(symbol).display(size)
            })
            .collect();
        debug!(
            characters = lines.len(),
            glyphs = factory.len(),
            "document rendered"
        );
        lines
    }
}

fn builder_demo() -> Vec<String> {
    let mut builder = GamingComputerBuilder::new();
    Director::new(&mut builder).construct();
    vec![builder.computer().to_string()]
}

fn copy_demo() -> Vec<String> {
    let original = TextDocument::new("Hello, World!");
    let mut copied = original.clone();
    copied.content = "Hello, Copy Constructor!".into();
    vec![original.print(), copied.print()]
}

fn bridge_demo() -> Vec<String> {
    let mut remote = TvRemoteControl::new(Tv::default());
    vec![remote.turn_on(), remote.turn_off()]
}

fn write_lines(sink: &mut impl Write, lines: &[String]) -> ApplicationResult<()> {
    for line in lines {
        writeln!(sink, "{line}").with_context("write transcript")?;
    }
    Ok(())
}
