// Parsing of the Kindle "My Clippings.txt" export format.
//
// The file is a sequence of annotation blocks separated by a "==========" line:
//
//   <Title> (<Author>)
//   <Location> | Added on <Weekday>, <D> <Month> <YYYY> <HH:MM:SS>
//   <blank line>
//   <excerpt, possibly several lines>
//   <trailing blank line>
//
// The device is not strict about this shape:
// - blocks after the first start with a leading blank line left by the split
// - the metadata line sometimes carries two location descriptors ("Your
//   Highlight on page 12 | Location 100-105 | Added on ...")
// - bookmarks and notes produce blocks that do not match the shape at all
//
// Blocks that fail to match are skipped and counted, never fatal.

pub mod library;
pub mod parser;
pub mod renderer;
