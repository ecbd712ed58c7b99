use crate::entity::{FieldExtension, FieldExtensionKind, Parameter, Returns, Throws};
use crate::markup::{Block, ListItem, format::plain_text};

use super::split::extract_parameter;
use super::tag::DocumentationTag;

impl ListItem {
    /// Extract a return description.
    ///
    /// ```markdown
    /// - Returns: ...
    /// ```
    pub fn extract_return_description(&self) -> Option<Returns> {
        let remainder = self.match_tag(&DocumentationTag::Returns.keyword(), true)?;
        Some(Returns::new(plain_text(&remainder, ""), self.children.clone()))
    }

    /// Extract a throws description.
    ///
    /// ```markdown
    /// - Throws: ...
    /// ```
    pub fn extract_throws_description(&self) -> Option<Throws> {
        let remainder = self.match_tag(&DocumentationTag::Throws.keyword(), true)?;
        Some(Throws::new(plain_text(&remainder, ""), self.children.clone()))
    }

    /// Extract an outline of parameters from the sublist under this item.
    ///
    /// ```markdown
    /// - Parameters:
    ///   - x: a number
    ///   - y: a number
    /// ```
    ///
    /// Only the first nested unordered list is read. Entries that aren't in
    /// `name: description` form are dropped. Blocks after an entry's first
    /// paragraph are appended to that parameter's description.
    ///
    /// Returns `Some` (possibly empty) whenever the tag matches.
    pub fn extract_parameter_outline(&self) -> Option<Vec<Parameter>> {
        self.match_tag(&DocumentationTag::Parameters.keyword(), true)?;

        let Some(parameter_list) = self.children.iter().find_map(|child| match child {
            Block::List(list) if !list.is_ordered() => Some(list),
            _ => None,
        }) else {
            return Some(Vec::new());
        };

        let parameters = parameter_list
            .items
            .iter()
            .filter_map(|entry| {
                let Some(Block::Paragraph(inlines)) = entry.children.first() else {
                    log::debug!("skipping parameter entry without a leading paragraph");
                    return None;
                };
                let Some(mut parameter) = extract_parameter(inlines) else {
                    log::debug!("skipping parameter entry not in `name: description` form");
                    return None;
                };
                parameter.append_description(entry.children[1..].to_vec());
                Some(parameter)
            })
            .collect();

        Some(parameters)
    }

    /// Extract a single parameter.
    ///
    /// ```markdown
    /// - Parameter x: A number.
    /// ```
    ///
    /// The name is split from the untouched paragraph rather than the
    /// tag-stripped remainder, so the parameter's raw nodes are the original ones.
    pub fn extract_standalone_parameter(&self) -> Option<Parameter> {
        self.match_tag(&DocumentationTag::Parameter.keyword(), false)?;
        extract_parameter(self.first_paragraph()?)
    }

    /// Extract a field extension, trying each known tag in
    /// [`FieldExtensionKind::ALL`] order.
    ///
    /// ```markdown
    /// - Note: ...
    /// - Warning: ...
    /// ```
    pub fn extract_field_extension(&self) -> Option<FieldExtension> {
        FieldExtensionKind::ALL.into_iter().find_map(|kind| {
            let contents = self.match_tag(&kind.keyword(), true)?;
            Some(FieldExtension::new(
                kind,
                plain_text(&contents, " "),
                self.children.clone(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn items(markdown: &str) -> Vec<ListItem> {
        let doc = parse(markdown);
        match doc.blocks.into_iter().next() {
            Some(Block::List(list)) => list.items,
            other => panic!("expected a list, got {other:?}"),
        }
    }

    fn first_item(markdown: &str) -> ListItem {
        items(markdown).remove(0)
    }

    #[test]
    fn extract_returns() {
        let item = first_item(
            "- Returns: `true` if a path from `source` to `destination` exists, `false` otherwise.",
        );
        let returns = item.extract_return_description().unwrap();
        assert_eq!(
            returns.description(),
            "`true` if a path from `source` to `destination` exists, `false` otherwise."
        );
        assert_eq!(returns.raw(), item.children.as_slice());
    }

    #[test]
    fn extract_returns_flattens_formatting() {
        let item = first_item("- Returns: a **bold** [link](https://example.com)");
        let returns = item.extract_return_description().unwrap();
        assert_eq!(returns.description(), "a bold link");
    }

    #[test]
    fn extract_throws() {
        let item = first_item("- Throws: Any error thrown by `deferred` or `work` (in that order).");
        let throws = item.extract_throws_description().unwrap();
        assert_eq!(
            throws.description(),
            "Any error thrown by `deferred` or `work` (in that order)."
        );
    }

    #[test]
    fn extract_parameters_section() {
        let item = first_item(
            "- parameters:\n  - executable: The absolute path to the executable to be invoked.\n  - arguments: Command-line arguments to be passed to the executable.",
        );
        let parameters = item.extract_parameter_outline().unwrap();
        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters[0].name(), "executable");
        assert_eq!(
            parameters[0].description(),
            "The absolute path to the executable to be invoked."
        );
        assert_eq!(parameters[1].name(), "arguments");
        assert_eq!(
            parameters[1].description(),
            "Command-line arguments to be passed to the executable."
        );
    }

    #[test]
    fn extract_parameters_section_with_remaining_text() {
        let item = first_item(
            "- parameters:
  - inputFiles: Files on which the contents of output files may depend.
    Any paths passed as `arguments` should typically be passed here as
    well.
  - outputFiles: Files to be generated or updated by the executable.
    Any files recognizable by their extension as source files
    (e.g. `.swift`) are compiled into the target for which this command
    was generated as if in its source directory; other files are treated
    as resources as if explicitly listed in `Package.swift` using
    `.process(...)`.",
        );
        let parameters = item.extract_parameter_outline().unwrap();
        assert_eq!(parameters[0].name(), "inputFiles");
        assert_eq!(
            parameters[0].description(),
            "Files on which the contents of output files may depend.
Any paths passed as `arguments` should typically be passed here as
well."
        );
        assert_eq!(parameters[1].name(), "outputFiles");
        assert_eq!(
            parameters[1].description(),
            "Files to be generated or updated by the executable.
Any files recognizable by their extension as source files
(e.g. `.swift`) are compiled into the target for which this command
was generated as if in its source directory; other files are treated
as resources as if explicitly listed in `Package.swift` using
`.process(...)`."
        );
    }

    #[test]
    fn parameter_outline_appends_continuation_blocks() {
        let item = first_item("- Parameters:\n\n  - x: first\n\n    more\n\n    again\n");
        let parameters = item.extract_parameter_outline().unwrap();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name(), "x");
        assert_eq!(parameters[0].description(), "firstmore again");
    }

    #[test]
    fn parameter_outline_drops_malformed_entries() {
        let item = first_item("- Parameters:\n  - x: first\n  - no colon\n  - `y`: code name\n  - z: last");
        let parameters = item.extract_parameter_outline().unwrap();
        let names = parameters.iter().map(Parameter::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["x", "z"]);
    }

    #[test]
    fn parameter_outline_without_sublist_is_empty() {
        let item = first_item("- Parameters: none");
        assert_eq!(item.extract_parameter_outline(), Some(Vec::new()));
    }

    #[test]
    fn parameter_outline_ignores_ordered_sublist() {
        let item = first_item("- Parameters:\n  1. x: first");
        assert_eq!(item.extract_parameter_outline(), Some(Vec::new()));
    }

    #[test]
    fn extract_standalone_parameter() {
        let item = first_item(
            "- Parameter displayName: An optional string to show in build logs and other status areas.",
        );
        let parameter = item.extract_standalone_parameter().unwrap();
        assert_eq!(parameter.name(), "displayName");
        assert_eq!(
            parameter.description(),
            "An optional string to show in build logs and other status areas."
        );
    }

    #[test]
    fn extract_standalone_parameter_with_remaining_text() {
        let item = first_item(
            "- parameter inputFiles: Files on which the contents of output files may depend.
  Any paths passed as `arguments` should typically be passed here as
  well.",
        );
        let parameter = item.extract_standalone_parameter().unwrap();
        assert_eq!(parameter.name(), "inputFiles");
        assert_eq!(
            parameter.description(),
            "Files on which the contents of output files may depend.
Any paths passed as `arguments` should typically be passed here as
well."
        );
    }

    #[test]
    fn standalone_parameter_raw_is_original_paragraph() {
        let item = first_item("- parameter x: hello");
        let parameter = item.extract_standalone_parameter().unwrap();
        assert_eq!(parameter.name(), "x");
        assert_eq!(parameter.description(), "hello");
        assert_eq!(parameter.raw().len(), 1);
        assert_eq!(parameter.raw()[0].format(), "parameter x: hello");
    }

    #[rstest]
    #[case("Attention", "Special attention is needed for this part.")]
    #[case("Author", "Who is the original author of this code?")]
    #[case("Authors", "List the co-authors of this code.")]
    #[case("Bug", "Describe any known bugs associated with this code.")]
    #[case("Complexity", "What is the computational complexity of this operation?")]
    #[case("Copyright", "Please specify the copyright information for this code.")]
    #[case("Date", "The date this code was written or last updated.")]
    #[case("Experiment", "This code is experimental and may be subject to changes.")]
    #[case("Important", "This information is very important.")]
    #[case("Invariant", "Describe the invariant condition of this code.")]
    #[case("Note", "Provides additional information about this operation.")]
    #[case("Postcondition", "Describe the condition that is guaranteed after this operation.")]
    #[case("Precondition", "Describe the conditions that must be met before starting this operation.")]
    #[case("Remark", "Provides additional comments or explanations.")]
    #[case("Remarks", "Provides multiple comments or explanations.")]
    #[case("Requires", "Describe the conditions required to execute this code.")]
    #[case("See", "Refer to related documents or resources.")]
    #[case("Since", "The version in which this feature was introduced.")]
    #[case("Todo", "List any tasks that are yet to be completed for this code.")]
    #[case("Version", "The current version number of this code.")]
    #[case("Warning", "Warns about potential problems or precautions when using this code.")]
    fn extract_field_extension(#[case] tag: &str, #[case] description: &str) {
        let item = first_item(&format!("- {tag}: {description}"));
        let extension = item.extract_field_extension().unwrap();
        assert_eq!(extension.name().as_str(), tag.to_lowercase());
        assert_eq!(extension.description(), description);
    }

    #[test]
    fn field_extension_joins_inlines_with_space() {
        let item = first_item("- Note: use `x` here");
        let extension = item.extract_field_extension().unwrap();
        assert_eq!(extension.name(), FieldExtensionKind::Note);
        assert_eq!(extension.description(), "use  `x`  here");
    }

    #[test]
    fn unknown_tag_is_not_a_field_extension() {
        let item = first_item("- SeeAlso: elsewhere");
        assert_eq!(item.extract_field_extension(), None);
        let item = first_item("- foo: bar");
        assert_eq!(item.extract_field_extension(), None);
    }
}
