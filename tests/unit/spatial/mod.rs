mod raster;
