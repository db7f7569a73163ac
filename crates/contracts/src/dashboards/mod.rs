pub mod d100_executive;
